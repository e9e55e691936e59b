/// Bounds applied while decoding untrusted input.
///
/// Every length read from the wire is checked against these limits before
/// any allocation happens, and every nested Variant, DataValue or
/// DiagnosticInfo consumes one level of `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecodeLimits {
    /// Maximum nesting of recursive structured values.
    pub max_depth: usize,
    /// Maximum number of array elements or array dimensions.
    pub max_array_length: usize,
    /// Maximum length in bytes of a string or byte string.
    pub max_string_length: usize,
}

impl DecodeLimits {
    pub const DEFAULT_MAX_DEPTH: usize = 100;
    pub const DEFAULT_MAX_ARRAY_LENGTH: usize = 1 << 20;
    pub const DEFAULT_MAX_STRING_LENGTH: usize = 1 << 24;

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_array_length(mut self, max_array_length: usize) -> Self {
        self.max_array_length = max_array_length;
        self
    }

    pub fn with_max_string_length(mut self, max_string_length: usize) -> Self {
        self.max_string_length = max_string_length;
        self
    }
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_array_length: Self::DEFAULT_MAX_ARRAY_LENGTH,
            max_string_length: Self::DEFAULT_MAX_STRING_LENGTH,
        }
    }
}
