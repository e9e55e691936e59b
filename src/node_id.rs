use core::fmt;

use crate::{BinaryCodec, ByteString, Decoder, Encoder, Error, Guid, Result};

const TWO_BYTE: u8 = 0x00;
const FOUR_BYTE: u8 = 0x01;
const NUMERIC: u8 = 0x02;
const STRING: u8 = 0x03;
const GUID: u8 = 0x04;
const BYTE_STRING: u8 = 0x05;

const ENCODING_MASK: u8 = 0x3F;
const NAMESPACE_URI_FLAG: u8 = 0x80;
const SERVER_INDEX_FLAG: u8 = 0x40;

/// The identifier part of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    Numeric(u32),
    String(String),
    Guid(Guid),
    Opaque(ByteString),
}

/// Identifies a node in a server's address space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub namespace: u16,
    pub identifier: Identifier,
}

impl NodeId {
    pub fn numeric(namespace: u16, id: u32) -> Self {
        Self { namespace, identifier: Identifier::Numeric(id) }
    }

    pub fn string(namespace: u16, id: impl Into<String>) -> Self {
        Self { namespace, identifier: Identifier::String(id.into()) }
    }

    pub fn guid(namespace: u16, id: Guid) -> Self {
        Self { namespace, identifier: Identifier::Guid(id) }
    }

    pub fn opaque(namespace: u16, id: impl Into<ByteString>) -> Self {
        Self { namespace, identifier: Identifier::Opaque(id.into()) }
    }

    /// The null node id, `ns=0;i=0`.
    pub fn null() -> Self {
        Self::numeric(0, 0)
    }

    pub fn is_null(&self) -> bool {
        self.namespace == 0 && self.identifier == Identifier::Numeric(0)
    }

    /// Reads the node id body given an already consumed encoding byte.
    fn decode_body(decoder: &mut Decoder<'_>, encoding: u8) -> Result<Self> {
        match encoding & ENCODING_MASK {
            TWO_BYTE => Ok(Self::numeric(0, decoder.read_u8()?.into())),
            FOUR_BYTE => {
                let namespace = decoder.read_u8()?.into();
                Ok(Self::numeric(namespace, decoder.read_u16()?.into()))
            }
            NUMERIC => {
                let namespace = decoder.read_u16()?;
                Ok(Self::numeric(namespace, decoder.read_u32()?))
            }
            STRING => {
                let namespace = decoder.read_u16()?;
                Ok(Self::string(namespace, decoder.read_string()?))
            }
            GUID => {
                let namespace = decoder.read_u16()?;
                Ok(Self::guid(namespace, decoder.read()?))
            }
            BYTE_STRING => {
                let namespace = decoder.read_u16()?;
                Ok(Self::opaque(namespace, decoder.read_byte_string()?))
            }
            _ => Err(Error::InvalidNodeIdEncoding(encoding)),
        }
    }

    /// Writes the node id with extra flag bits ORed into its encoding byte.
    fn encode_with_flags(&self, encoder: &mut Encoder, flags: u8) -> Result<()> {
        let ns = self.namespace;
        match &self.identifier {
            Identifier::Numeric(id) => {
                if let (0, Ok(id)) = (ns, u8::try_from(*id)) {
                    encoder.write_u8(TWO_BYTE | flags)?;
                    encoder.write_u8(id)
                } else if let (Ok(ns), Ok(id)) =
                    (u8::try_from(ns), u16::try_from(*id))
                {
                    encoder.write_u8(FOUR_BYTE | flags)?;
                    encoder.write_u8(ns)?;
                    encoder.write_u16(id)
                } else {
                    encoder.write_u8(NUMERIC | flags)?;
                    encoder.write_u16(ns)?;
                    encoder.write_u32(*id)
                }
            }
            Identifier::String(id) => {
                encoder.write_u8(STRING | flags)?;
                encoder.write_u16(ns)?;
                encoder.write_string(id)
            }
            Identifier::Guid(id) => {
                encoder.write_u8(GUID | flags)?;
                encoder.write_u16(ns)?;
                encoder.write(id)
            }
            Identifier::Opaque(id) => {
                encoder.write_u8(BYTE_STRING | flags)?;
                encoder.write_u16(ns)?;
                encoder.write_byte_string(id)
            }
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(id) => write!(f, "i={id}"),
            Identifier::String(id) => write!(f, "s={id}"),
            Identifier::Guid(id) => write!(f, "g={id}"),
            Identifier::Opaque(id) => write!(f, "b={}", hex::encode(id)),
        }
    }
}

impl BinaryCodec for NodeId {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let encoding = decoder.read_u8()?;
        if encoding & !ENCODING_MASK != 0 {
            return Err(Error::InvalidNodeIdEncoding(encoding));
        }
        Self::decode_body(decoder, encoding)
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        self.encode_with_flags(encoder, 0)
    }
}

/// A [`NodeId`] that may also name its namespace by URI and live on another
/// server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpandedNodeId {
    pub node_id: NodeId,
    pub namespace_uri: Option<String>,
    pub server_index: Option<u32>,
}

impl ExpandedNodeId {
    pub fn new(node_id: NodeId) -> Self {
        Self { node_id, namespace_uri: None, server_index: None }
    }

    pub fn with_namespace_uri(mut self, uri: impl Into<String>) -> Self {
        self.namespace_uri = Some(uri.into());
        self
    }

    pub fn with_server_index(mut self, index: u32) -> Self {
        self.server_index = Some(index);
        self
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self { Self::new(node_id) }
}

impl fmt::Display for ExpandedNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.server_index {
            write!(f, "svr={index};")?;
        }
        if let Some(uri) = &self.namespace_uri {
            write!(f, "nsu={uri};")?;
        }
        write!(f, "{}", self.node_id)
    }
}

impl BinaryCodec for ExpandedNodeId {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let encoding = decoder.read_u8()?;
        let node_id = NodeId::decode_body(decoder, encoding)?;
        let namespace_uri = if encoding & NAMESPACE_URI_FLAG != 0 {
            Some(decoder.read_string()?)
        } else {
            None
        };
        let server_index = if encoding & SERVER_INDEX_FLAG != 0 {
            Some(decoder.read_u32()?)
        } else {
            None
        };
        Ok(Self { node_id, namespace_uri, server_index })
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let mut flags = 0;
        if self.namespace_uri.is_some() {
            flags |= NAMESPACE_URI_FLAG;
        }
        if self.server_index.is_some() {
            flags |= SERVER_INDEX_FLAG;
        }
        self.node_id.encode_with_flags(encoder, flags)?;
        if let Some(uri) = &self.namespace_uri {
            encoder.write_string(uri)?;
        }
        if let Some(index) = self.server_index {
            encoder.write_u32(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(id: &NodeId) -> Vec<u8> {
        id.to_bytes().unwrap()
    }

    #[test]
    fn picks_compact_numeric_form() {
        assert_eq!(encoded(&NodeId::numeric(0, 85)), vec![0x00, 0x55]);
        assert_eq!(
            encoded(&NodeId::numeric(5, 1025)),
            vec![0x01, 0x05, 0x01, 0x04]
        );
        assert_eq!(
            encoded(&NodeId::numeric(300, 7)),
            vec![0x02, 0x2c, 0x01, 0x07, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn rejects_unknown_encoding() {
        assert!(matches!(
            NodeId::from_bytes(&[0x06, 0x00]),
            Err(Error::InvalidNodeIdEncoding(0x06))
        ));
        assert!(matches!(
            NodeId::from_bytes(&[0x80, 0x00]),
            Err(Error::InvalidNodeIdEncoding(0x80))
        ));
    }

    #[test]
    fn display() {
        assert_eq!(NodeId::numeric(0, 85).to_string(), "i=85");
        assert_eq!(NodeId::string(2, "Pump").to_string(), "ns=2;s=Pump");
        let expanded = ExpandedNodeId::new(NodeId::numeric(1, 7))
            .with_namespace_uri("urn:plant")
            .with_server_index(3);
        assert_eq!(expanded.to_string(), "svr=3;nsu=urn:plant;ns=1;i=7");
    }
}
