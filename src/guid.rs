use core::fmt;

use uuid::Uuid;

use crate::{BinaryCodec, Decoder, Encoder, Result};

/// A 16-byte globally unique identifier.
///
/// On the wire the first three fields are little-endian integers followed
/// by eight raw bytes, the classic mixed-endian GUID layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid(Uuid);

impl Guid {
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    pub const fn from_fields(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> Self {
        Self(Uuid::from_fields(d1, d2, d3, &d4))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for Guid {
    fn from(uuid: Uuid) -> Self { Self(uuid) }
}

impl From<Guid> for Uuid {
    fn from(guid: Guid) -> Self { guid.0 }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl BinaryCodec for Guid {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let d1 = decoder.read_u32()?;
        let d2 = decoder.read_u16()?;
        let d3 = decoder.read_u16()?;
        let d4 = decoder.read_array::<8>()?;
        Ok(Self::from_fields(d1, d2, d3, d4))
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let (d1, d2, d3, d4) = self.0.as_fields();
        encoder.write_u32(d1)?;
        encoder.write_u16(d2)?;
        encoder.write_u16(d3)?;
        encoder.write_bytes(d4)
    }
}
