use crate::{BinaryCodec, ByteString, DateTime, DecodeLimits, Error, Result};

/// Forward-only little-endian reader over a borrowed buffer.
///
/// Every read either consumes exactly the bytes of the requested value or
/// fails without producing a value; callers propagate the first failure
/// with `?`.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
    depth: usize,
    limits: DecodeLimits,
}

impl<'a> Decoder<'a> {
    /// A reader over `data` with the default limits.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, DecodeLimits::default())
    }

    /// A reader over `data` with custom limits.
    pub fn with_limits(data: &'a [u8], limits: DecodeLimits) -> Self {
        Self { data, pos: 0, depth: 0, limits }
    }

    /// Number of bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// The limits applied to lengths, counts and nesting.
    pub fn limits(&self) -> &DecodeLimits {
        &self.limits
    }

    /// Current nesting level of recursive values.
    pub fn depth(&self) -> usize {
        self.depth
    }

    // ───────────────────────────── Primitives ───────────────────────────────

    /// Reads `n` raw bytes.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if remaining < n {
            return Err(Error::UnexpectedEnd { needed: n, remaining });
        }
        let out = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Reads exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// Reads a `Byte`.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Reads an `SByte`.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    /// Any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Reads a little-endian `UInt16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `Int16`.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `UInt32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `Int32`.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `UInt64`.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Reads a little-endian `Int64`.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads an IEEE 754 single-precision `Float`.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    /// Reads an IEEE 754 double-precision `Double`.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_le_bytes(self.read_array()?))
    }

    // ─────────────────────────── Length-prefixed ────────────────────────────

    /// Reads an `i32` length prefix where `-1` marks a null value.
    fn read_length(&mut self, what: &'static str) -> Result<Option<usize>> {
        let len = self.read_i32()?;
        if len == -1 {
            return Ok(None);
        }
        let len = usize::try_from(len).map_err(|_| Error::InvalidLength(len))?;
        let max = self.limits.max_string_length;
        if len > max {
            return Err(Error::LimitExceeded { what, len, max });
        }
        Ok(Some(len))
    }

    /// Reads a length-prefixed UTF-8 string. Null decodes as empty.
    pub fn read_string(&mut self) -> Result<String> {
        match self.read_length("string length")? {
            None => Ok(String::new()),
            Some(len) => Ok(String::from_utf8(self.read_bytes(len)?.to_vec())?),
        }
    }

    /// Reads a length-prefixed byte string, keeping null apart from empty.
    pub fn read_byte_string(&mut self) -> Result<ByteString> {
        match self.read_length("byte string length")? {
            None => Ok(ByteString::null()),
            Some(len) => Ok(ByteString::from(self.read_bytes(len)?)),
        }
    }

    /// Reads a `DateTime` as signed 100 ns ticks since 1601.
    pub fn read_date_time(&mut self) -> Result<DateTime> {
        Ok(DateTime::from_ticks(self.read_i64()?))
    }

    /// Reads an `i32` element or dimension count.
    pub fn read_count(&mut self, what: &'static str) -> Result<usize> {
        let count = self.read_i32()?;
        let count =
            usize::try_from(count).map_err(|_| Error::InvalidLength(count))?;
        let max = self.limits.max_array_length;
        if count > max {
            return Err(Error::LimitExceeded { what, len: count, max });
        }
        Ok(count)
    }

    // ───────────────────────────── Delegation ───────────────────────────────

    /// Decodes a structured value through its own codec.
    pub fn read<T: BinaryCodec>(&mut self) -> Result<T> {
        T::decode(self)
    }

    /// Runs `f` one nesting level deeper, failing once the configured
    /// maximum depth would be exceeded.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let max = self.limits.max_depth;
        if self.depth >= max {
            tracing::warn!(
                max_depth = max,
                position = self.pos,
                "nesting limit reached while decoding"
            );
            return Err(Error::NestingTooDeep(max));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
