use core::fmt;

use crate::{BinaryCodec, Decoder, Encoder, Result};

/// A name qualified by the index of its namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    pub namespace_index: u16,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace_index: u16, name: impl Into<String>) -> Self {
        Self { namespace_index, name: name.into() }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace_index, self.name)
    }
}

impl BinaryCodec for QualifiedName {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let namespace_index = decoder.read_u16()?;
        let name = decoder.read_string()?;
        Ok(Self { namespace_index, name })
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_u16(self.namespace_index)?;
        encoder.write_string(&self.name)
    }
}
