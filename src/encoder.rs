use crate::{BinaryCodec, ByteString, DateTime, Error, Result};

/// Little-endian writer that accumulates bytes in memory.
///
/// A bounded encoder rejects any write that would grow the output past its
/// limit; nothing of the rejected write is appended.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    output: Vec<u8>,
    limit: Option<usize>,
}

impl Encoder {
    /// An unbounded encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// An encoder that refuses to grow past `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self { output: Vec::new(), limit: Some(limit) }
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> usize {
        self.output.len()
    }

    /// The bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }

    /// Consumes the encoder, returning its output.
    pub fn into_bytes(self) -> Vec<u8> {
        self.output
    }

    // ───────────────────────────── Primitives ───────────────────────────────

    /// Appends raw bytes, all or nothing.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        if let Some(limit) = self.limit {
            let remaining = limit.saturating_sub(self.output.len());
            if data.len() > remaining {
                return Err(Error::BufferFull { needed: data.len(), remaining });
            }
        }
        self.output.extend_from_slice(data);
        Ok(())
    }

    /// Writes a `Byte`.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Writes an `SByte`.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a `Boolean` as `0` or `1`.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u8(u8::from(value))
    }

    /// Writes a little-endian `UInt16`.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `Int16`.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `UInt32`.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `Int32`.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `UInt64`.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes a little-endian `Int64`.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an IEEE 754 single-precision `Float`.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes an IEEE 754 double-precision `Double`.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    // ─────────────────────────── Length-prefixed ────────────────────────────

    /// Writes an `i32` length followed by `data`, or just `-1` for `None`.
    fn write_prefixed(&mut self, data: Option<&[u8]>) -> Result<()> {
        let Some(data) = data else {
            return self.write_i32(-1);
        };
        let len =
            i32::try_from(data.len()).map_err(|_| Error::LengthOverflow(data.len()))?;
        self.write_i32(len)?;
        self.write_bytes(data)
    }

    /// Writes a length-prefixed UTF-8 string. An empty string is written
    /// as null.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_prefixed((!value.is_empty()).then_some(value.as_bytes()))
    }

    /// Writes a length-prefixed byte string. Null is written as `-1` and an
    /// empty byte string as `0`.
    pub fn write_byte_string(&mut self, value: &ByteString) -> Result<()> {
        self.write_prefixed(value.as_option())
    }

    /// Writes a `DateTime` as its tick count.
    pub fn write_date_time(&mut self, value: DateTime) -> Result<()> {
        self.write_i64(value.ticks())
    }

    /// Writes an `i32` element or dimension count.
    pub fn write_count(&mut self, count: usize) -> Result<()> {
        let count =
            i32::try_from(count).map_err(|_| Error::LengthOverflow(count))?;
        self.write_i32(count)
    }

    // ───────────────────────────── Delegation ───────────────────────────────

    /// Encodes a structured value through its own codec.
    pub fn write<T: BinaryCodec>(&mut self, value: &T) -> Result<()> {
        value.encode(self)
    }
}
