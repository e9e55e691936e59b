use core::fmt;

use crate::{BinaryCodec, Decoder, Encoder, Result};

/// An opaque sequence of bytes, or null.
///
/// Kept distinct from an array of `Byte` values: a byte string is a single
/// scalar on the wire with its own length prefix. A null byte string (length
/// `-1`) and an empty one (length `0`) are different values and each encodes
/// back to its own length. The default is null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ByteString(Option<Vec<u8>>);

impl ByteString {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(Some(data.into()))
    }

    /// The null byte string.
    pub const fn null() -> Self {
        Self(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    /// The contents, empty for null.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_deref().unwrap_or_default()
    }

    /// The contents, or `None` for null.
    pub fn as_option(&self) -> Option<&[u8]> {
        self.0.as_deref()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0.unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// True for both null and zero-length byte strings.
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(data: Vec<u8>) -> Self { Self(Some(data)) }
}

impl From<&[u8]> for ByteString {
    fn from(data: &[u8]) -> Self { Self(Some(data.to_vec())) }
}

impl<const N: usize> From<[u8; N]> for ByteString {
    fn from(data: [u8; N]) -> Self { Self(Some(data.to_vec())) }
}

impl From<Option<Vec<u8>>> for ByteString {
    fn from(data: Option<Vec<u8>>) -> Self { Self(data) }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => f.write_str("null"),
            Some(data) => write!(f, "h'{}'", hex::encode(data)),
        }
    }
}

impl BinaryCodec for ByteString {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        decoder.read_byte_string()
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_byte_string(self)
    }
}

/// An XML fragment carried as text.
///
/// Same wire layout as a string, but a separate built-in type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XmlElement(String);

impl XmlElement {
    pub fn new(xml: impl Into<String>) -> Self {
        Self(xml.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for XmlElement {
    fn from(xml: String) -> Self { Self(xml) }
}

impl From<&str> for XmlElement {
    fn from(xml: &str) -> Self { Self(xml.to_string()) }
}

impl fmt::Display for XmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl BinaryCodec for XmlElement {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        Ok(Self(decoder.read_string()?))
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write_string(&self.0)
    }
}
