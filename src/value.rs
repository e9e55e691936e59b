use core::fmt;

use crate::{
    ByteString, DataValue, DateTime, Decoder, DiagnosticInfo, Encoder,
    ExpandedNodeId, ExtensionObject, Guid, LocalizedText, NodeId,
    QualifiedName, Result, StatusCode, TypeId, Variant, XmlElement,
};

/// A single element of a [`Variant`], one case per built-in type.
///
/// The recursive kinds are boxed so that a `Value` stays a fixed, modest
/// size.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
    DateTime(DateTime),
    Guid(Guid),
    ByteString(ByteString),
    XmlElement(XmlElement),
    NodeId(NodeId),
    ExpandedNodeId(ExpandedNodeId),
    StatusCode(StatusCode),
    QualifiedName(QualifiedName),
    LocalizedText(LocalizedText),
    ExtensionObject(ExtensionObject),
    DataValue(Box<DataValue>),
    Variant(Box<Variant>),
    DiagnosticInfo(Box<DiagnosticInfo>),
}

impl Value {
    pub fn type_id(&self) -> TypeId {
        match self {
            Value::Boolean(_) => TypeId::Boolean,
            Value::SByte(_) => TypeId::SByte,
            Value::Byte(_) => TypeId::Byte,
            Value::Int16(_) => TypeId::Int16,
            Value::UInt16(_) => TypeId::UInt16,
            Value::Int32(_) => TypeId::Int32,
            Value::UInt32(_) => TypeId::UInt32,
            Value::Int64(_) => TypeId::Int64,
            Value::UInt64(_) => TypeId::UInt64,
            Value::Float(_) => TypeId::Float,
            Value::Double(_) => TypeId::Double,
            Value::String(_) => TypeId::String,
            Value::DateTime(_) => TypeId::DateTime,
            Value::Guid(_) => TypeId::Guid,
            Value::ByteString(_) => TypeId::ByteString,
            Value::XmlElement(_) => TypeId::XmlElement,
            Value::NodeId(_) => TypeId::NodeId,
            Value::ExpandedNodeId(_) => TypeId::ExpandedNodeId,
            Value::StatusCode(_) => TypeId::StatusCode,
            Value::QualifiedName(_) => TypeId::QualifiedName,
            Value::LocalizedText(_) => TypeId::LocalizedText,
            Value::ExtensionObject(_) => TypeId::ExtensionObject,
            Value::DataValue(_) => TypeId::DataValue,
            Value::Variant(_) => TypeId::Variant,
            Value::DiagnosticInfo(_) => TypeId::DiagnosticInfo,
        }
    }

    /// Reads one element of the given kind.
    pub fn decode_as(type_id: TypeId, decoder: &mut Decoder<'_>) -> Result<Self> {
        let value = match type_id {
            TypeId::Boolean => Value::Boolean(decoder.read_bool()?),
            TypeId::SByte => Value::SByte(decoder.read_i8()?),
            TypeId::Byte => Value::Byte(decoder.read_u8()?),
            TypeId::Int16 => Value::Int16(decoder.read_i16()?),
            TypeId::UInt16 => Value::UInt16(decoder.read_u16()?),
            TypeId::Int32 => Value::Int32(decoder.read_i32()?),
            TypeId::UInt32 => Value::UInt32(decoder.read_u32()?),
            TypeId::Int64 => Value::Int64(decoder.read_i64()?),
            TypeId::UInt64 => Value::UInt64(decoder.read_u64()?),
            TypeId::Float => Value::Float(decoder.read_f32()?),
            TypeId::Double => Value::Double(decoder.read_f64()?),
            TypeId::String => Value::String(decoder.read_string()?),
            TypeId::DateTime => Value::DateTime(decoder.read_date_time()?),
            TypeId::Guid => Value::Guid(decoder.read()?),
            TypeId::ByteString => Value::ByteString(decoder.read_byte_string()?),
            TypeId::XmlElement => Value::XmlElement(decoder.read()?),
            TypeId::NodeId => Value::NodeId(decoder.read()?),
            TypeId::ExpandedNodeId => Value::ExpandedNodeId(decoder.read()?),
            TypeId::StatusCode => Value::StatusCode(decoder.read()?),
            TypeId::QualifiedName => Value::QualifiedName(decoder.read()?),
            TypeId::LocalizedText => Value::LocalizedText(decoder.read()?),
            TypeId::ExtensionObject => Value::ExtensionObject(decoder.read()?),
            TypeId::DataValue => Value::DataValue(Box::new(decoder.read()?)),
            TypeId::Variant => Value::Variant(Box::new(decoder.read()?)),
            TypeId::DiagnosticInfo => {
                Value::DiagnosticInfo(Box::new(decoder.read()?))
            }
        };
        Ok(value)
    }

    /// Writes the element without any type information.
    pub fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        match self {
            Value::Boolean(v) => encoder.write_bool(*v),
            Value::SByte(v) => encoder.write_i8(*v),
            Value::Byte(v) => encoder.write_u8(*v),
            Value::Int16(v) => encoder.write_i16(*v),
            Value::UInt16(v) => encoder.write_u16(*v),
            Value::Int32(v) => encoder.write_i32(*v),
            Value::UInt32(v) => encoder.write_u32(*v),
            Value::Int64(v) => encoder.write_i64(*v),
            Value::UInt64(v) => encoder.write_u64(*v),
            Value::Float(v) => encoder.write_f32(*v),
            Value::Double(v) => encoder.write_f64(*v),
            Value::String(v) => encoder.write_string(v),
            Value::DateTime(v) => encoder.write_date_time(*v),
            Value::Guid(v) => encoder.write(v),
            Value::ByteString(v) => encoder.write_byte_string(v),
            Value::XmlElement(v) => encoder.write(v),
            Value::NodeId(v) => encoder.write(v),
            Value::ExpandedNodeId(v) => encoder.write(v),
            Value::StatusCode(v) => encoder.write(v),
            Value::QualifiedName(v) => encoder.write(v),
            Value::LocalizedText(v) => encoder.write(v),
            Value::ExtensionObject(v) => encoder.write(v),
            Value::DataValue(v) => encoder.write(v.as_ref()),
            Value::Variant(v) => encoder.write(v.as_ref()),
            Value::DiagnosticInfo(v) => encoder.write(v.as_ref()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{v}"),
            Value::SByte(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Double(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "{v:?}"),
            Value::DateTime(v) => write!(f, "{v}"),
            Value::Guid(v) => write!(f, "{v}"),
            Value::ByteString(v) => write!(f, "{v}"),
            Value::XmlElement(v) => write!(f, "{v}"),
            Value::NodeId(v) => write!(f, "{v}"),
            Value::ExpandedNodeId(v) => write!(f, "{v}"),
            Value::StatusCode(v) => write!(f, "{v}"),
            Value::QualifiedName(v) => write!(f, "{v}"),
            Value::LocalizedText(v) => write!(f, "{v:?}", v = v.as_str()),
            Value::ExtensionObject(v) => write!(f, "ExtensionObject({})", v.type_id),
            Value::DataValue(v) => match &v.value {
                Some(value) => write!(f, "DataValue({value})"),
                None => f.write_str("DataValue(null)"),
            },
            Value::Variant(v) => write!(f, "Variant({v})"),
            Value::DiagnosticInfo(_) => f.write_str("DiagnosticInfo"),
        }
    }
}

// ──────────────────────────── Typed conversions ─────────────────────────────

/// A Rust type that maps onto exactly one built-in type.
///
/// There is no implicit widening: an `i32` is always `Int32`, never `Int64`.
pub trait VariantType: Into<Value> {
    const TYPE_ID: TypeId;
}

macro_rules! variant_types {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self { Value::$kind(value) }
            }

            impl VariantType for $ty {
                const TYPE_ID: TypeId = TypeId::$kind;
            }
        )+
    };
}

macro_rules! boxed_variant_types {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self { Value::$kind(Box::new(value)) }
            }

            impl VariantType for $ty {
                const TYPE_ID: TypeId = TypeId::$kind;
            }
        )+
    };
}

variant_types! {
    bool => Boolean,
    i8 => SByte,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    String => String,
    DateTime => DateTime,
    Guid => Guid,
    ByteString => ByteString,
    XmlElement => XmlElement,
    NodeId => NodeId,
    ExpandedNodeId => ExpandedNodeId,
    StatusCode => StatusCode,
    QualifiedName => QualifiedName,
    LocalizedText => LocalizedText,
    ExtensionObject => ExtensionObject,
}

boxed_variant_types! {
    DataValue => DataValue,
    Variant => Variant,
    DiagnosticInfo => DiagnosticInfo,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Value::String(value.to_string()) }
}

impl VariantType for &str {
    const TYPE_ID: TypeId = TypeId::String;
}
