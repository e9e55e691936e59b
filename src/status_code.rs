use core::fmt;

use crate::{BinaryCodec, Decoder, Encoder, Result};

const SEVERITY_MASK: u32 = 0xC000_0000;

/// A 32-bit OPC UA result code.
///
/// Shares the `UInt32` wire layout but is a distinct built-in type; the top
/// two bits carry the severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatusCode(u32);

impl StatusCode {
    pub const GOOD: StatusCode = StatusCode(0);
    pub const UNCERTAIN: StatusCode = StatusCode(0x4000_0000);
    pub const BAD: StatusCode = StatusCode(0x8000_0000);

    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn is_good(self) -> bool {
        self.0 & SEVERITY_MASK == 0
    }

    pub fn is_uncertain(self) -> bool {
        self.0 & SEVERITY_MASK == Self::UNCERTAIN.0
    }

    pub fn is_bad(self) -> bool {
        self.0 & Self::BAD.0 != 0
    }
}

impl From<u32> for StatusCode {
    fn from(bits: u32) -> Self { Self(bits) }
}

impl From<StatusCode> for u32 {
    fn from(code: StatusCode) -> Self { code.0 }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl BinaryCodec for StatusCode {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(Self(decoder.read_u32()?))
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_u32(self.0)
    }
}
