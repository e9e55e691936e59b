use crate::{DecodeLimits, Decoder, Encoder, Result};

/// A value with a self-contained OPC UA binary encoding.
///
/// Implementations read and write exactly their own bytes and leave the
/// shared cursor positioned right after them, so that composite values can
/// delegate to their members in wire order.
pub trait BinaryCodec: Sized {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self>;

    fn encode(&self, encoder: &mut Encoder) -> Result<()>;

    /// Decodes a value from the front of `bytes` with the default limits.
    ///
    /// Returns the value and the number of bytes consumed. Trailing bytes
    /// are left alone.
    fn from_bytes(bytes: &[u8]) -> Result<(Self, usize)> {
        Self::from_bytes_with_limits(bytes, DecodeLimits::default())
    }

    fn from_bytes_with_limits(
        bytes: &[u8],
        limits: DecodeLimits,
    ) -> Result<(Self, usize)> {
        let mut decoder = Decoder::with_limits(bytes, limits);
        let value = Self::decode(&mut decoder)?;
        Ok((value, decoder.position()))
    }

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut encoder = Encoder::new();
        self.encode(&mut encoder)?;
        Ok(encoder.into_bytes())
    }
}
