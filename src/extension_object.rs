use crate::{
    BinaryCodec, ByteString, Decoder, Encoder, Error, NodeId, Result,
    XmlElement,
};

const NO_BODY: u8 = 0x00;
const BINARY_BODY: u8 = 0x01;
const XML_BODY: u8 = 0x02;

/// The still-encoded payload of an [`ExtensionObject`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ExtensionObjectBody {
    #[default]
    None,
    Binary(ByteString),
    Xml(XmlElement),
}

/// A structure of a type not built into the protocol, carried opaquely
/// together with the node id of its encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ExtensionObject {
    pub type_id: NodeId,
    pub body: ExtensionObjectBody,
}

impl ExtensionObject {
    pub fn binary(type_id: NodeId, body: impl Into<ByteString>) -> Self {
        Self { type_id, body: ExtensionObjectBody::Binary(body.into()) }
    }

    pub fn xml(type_id: NodeId, body: impl Into<XmlElement>) -> Self {
        Self { type_id, body: ExtensionObjectBody::Xml(body.into()) }
    }

    pub fn is_empty(&self) -> bool {
        self.body == ExtensionObjectBody::None
    }
}

impl BinaryCodec for ExtensionObject {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let type_id = decoder.read()?;
        let body = match decoder.read_u8()? {
            NO_BODY => ExtensionObjectBody::None,
            BINARY_BODY => {
                ExtensionObjectBody::Binary(decoder.read_byte_string()?)
            }
            XML_BODY => ExtensionObjectBody::Xml(decoder.read()?),
            other => return Err(Error::InvalidBodyEncoding(other)),
        };
        Ok(Self { type_id, body })
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        encoder.write(&self.type_id)?;
        match &self.body {
            ExtensionObjectBody::None => encoder.write_u8(NO_BODY),
            ExtensionObjectBody::Binary(body) => {
                encoder.write_u8(BINARY_BODY)?;
                encoder.write_byte_string(body)
            }
            ExtensionObjectBody::Xml(body) => {
                encoder.write_u8(XML_BODY)?;
                encoder.write(body)
            }
        }
    }
}
