use crate::TypeId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot store a value of type `{0}` in a variant")]
    UnsupportedType(&'static str),

    #[error("array element of kind {found:?} in an array of {expected:?}")]
    MixedArray { expected: TypeId, found: TypeId },

    #[error("variant has no value")]
    EmptyVariant,

    #[error("array dimensions require an array of values")]
    DimensionsWithoutArray,

    #[error("unexpected end of data: needed {needed} bytes, {remaining} left")]
    UnexpectedEnd { needed: usize, remaining: usize },

    #[error("invalid length prefix {0}")]
    InvalidLength(i32),

    #[error("string is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("unknown built-in type id {0}")]
    UnknownTypeId(u8),

    #[error("encoding mask 0x{0:02x} has array dimensions without values")]
    DimensionsWithoutValues(u8),

    #[error("invalid node id encoding 0x{0:02x}")]
    InvalidNodeIdEncoding(u8),

    #[error("invalid extension object body encoding 0x{0:02x}")]
    InvalidBodyEncoding(u8),

    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("{what} of {len} exceeds the limit of {max}")]
    LimitExceeded {
        what: &'static str,
        len: usize,
        max: usize,
    },

    #[error("length {0} does not fit a 32-bit length field")]
    LengthOverflow(usize),

    #[error("output buffer full: needed {needed} bytes, {remaining} left")]
    BufferFull { needed: usize, remaining: usize },
}

impl Error {
    /// Returns true for failures raised while reading wire data, as opposed
    /// to misuse of the construction API or a rejected write.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedEnd { .. }
                | Error::InvalidLength(_)
                | Error::InvalidUtf8(_)
                | Error::UnknownTypeId(_)
                | Error::DimensionsWithoutValues(_)
                | Error::InvalidNodeIdEncoding(_)
                | Error::InvalidBodyEncoding(_)
                | Error::NestingTooDeep(_)
                | Error::LimitExceeded { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for String {
    fn from(err: Error) -> Self { err.to_string() }
}
