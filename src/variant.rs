use core::{any::Any, fmt, slice};

use crate::{
    BinaryCodec, ByteString, DataValue, DateTime, Decoder, DiagnosticInfo,
    EncodingMask, Encoder, Error, ExpandedNodeId, ExtensionObject, Guid,
    LocalizedText, NodeId, QualifiedName, Result, StatusCode, TypeId, Value,
    VariantType, XmlElement,
};

/// What a [`Variant`] holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// Never set. Cannot be encoded.
    #[default]
    Empty,
    Scalar(Value),
    /// The flat element sequence of a one- or multi-dimensional array.
    Array(Vec<Value>),
}

/// A self-describing value of any built-in type, or a homogeneous array of
/// one such type.
///
/// The encoding mask is derived from the payload whenever the payload is
/// replaced, so the type id in the mask always names the kind of every
/// stored element.
///
/// ```
/// use ua_variant::{BinaryCodec, TypeId, Variant};
///
/// let v = Variant::new(-2i16);
/// let bytes = v.to_bytes().unwrap();
/// assert_eq!(bytes, [0x04, 0xfe, 0xff]);
///
/// let (back, consumed) = Variant::from_bytes(&bytes).unwrap();
/// assert_eq!(consumed, 3);
/// assert_eq!(back.type_id(), Some(TypeId::Int16));
/// assert_eq!(back.as_signed_int(), -2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    mask: EncodingMask,
    payload: Payload,
    dimensions: Option<Vec<i32>>,
}

impl Variant {
    // ───────────────────────────── Constructors ─────────────────────────────

    /// Wraps a single value.
    pub fn new(value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            mask: EncodingMask::scalar(value.type_id()),
            payload: Payload::Scalar(value),
            dimensions: None,
        }
    }

    /// Wraps a one-dimensional array. The element type is fixed by `T`, so
    /// an empty array still has a type.
    pub fn from_array<T: VariantType>(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            mask: EncodingMask::array(T::TYPE_ID),
            payload: Payload::Array(values.into_iter().map(Into::into).collect()),
            dimensions: None,
        }
    }

    /// Wraps an array of dynamically typed values, all of which must be of
    /// kind `type_id`.
    pub fn from_values(type_id: TypeId, values: Vec<Value>) -> Result<Self> {
        if let Some(found) = values
            .iter()
            .map(Value::type_id)
            .find(|found| *found != type_id)
        {
            return Err(Error::MixedArray { expected: type_id, found });
        }
        Ok(Self {
            mask: EncodingMask::array(type_id),
            payload: Payload::Array(values),
            dimensions: None,
        })
    }

    /// Wraps a value whose type is only known at runtime.
    ///
    /// Accepts any of the Rust types with a [`VariantType`] impl, `&'static
    /// str`, [`Value`], and `Vec`s of them (`Vec<u8>` becomes a
    /// `ByteString`). A `Vec<Value>` takes its kind from the first element
    /// and must not mix kinds. Anything else, including an empty
    /// `Vec<Value>`, fails with [`Error::UnsupportedType`].
    pub fn try_new<T: Any>(value: T) -> Result<Self> {
        from_any(Box::new(value))?
            .ok_or(Error::UnsupportedType(core::any::type_name::<T>()))
    }

    /// Adds array dimensions to an array variant.
    pub fn with_dimensions(mut self, dimensions: Vec<i32>) -> Result<Self> {
        self.set_dimensions(dimensions)?;
        Ok(self)
    }

    // ─────────────────────────────── Mutation ───────────────────────────────

    /// Replaces the payload with a single value. Any dimensions are dropped.
    pub fn set(&mut self, value: impl Into<Value>) {
        *self = Self::new(value);
    }

    /// Replaces the payload with an array. Any dimensions are dropped.
    pub fn set_array<T: VariantType>(&mut self, values: impl IntoIterator<Item = T>) {
        *self = Self::from_array(values);
    }

    /// Runtime-typed [`Variant::set`]. On failure `self` is left as it was.
    pub fn try_set<T: Any>(&mut self, value: T) -> Result<()> {
        *self = Self::try_new(value)?;
        Ok(())
    }

    /// Attaches the sizes of each dimension of a multi-dimensional array.
    ///
    /// Only arrays can carry dimensions. Whether their product matches the
    /// number of elements is left to the caller.
    pub fn set_dimensions(&mut self, dimensions: Vec<i32>) -> Result<()> {
        if !self.is_array() {
            return Err(Error::DimensionsWithoutArray);
        }
        self.mask.set(EncodingMask::ARRAY_DIMENSIONS, true);
        self.dimensions = Some(dimensions);
        Ok(())
    }

    pub fn clear_dimensions(&mut self) {
        self.mask.set(EncodingMask::ARRAY_DIMENSIONS, false);
        self.dimensions = None;
    }

    // ─────────────────────────────── Accessors ──────────────────────────────

    pub fn encoding_mask(&self) -> EncodingMask {
        self.mask
    }

    /// The built-in type of the payload, or `None` for an empty variant.
    pub fn type_id(&self) -> Option<TypeId> {
        match self.payload {
            Payload::Empty => None,
            _ => self.mask.type_id().ok(),
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_payload(self) -> Payload {
        self.payload
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.payload, Payload::Empty)
    }

    pub fn is_array(&self) -> bool {
        matches!(self.payload, Payload::Array(_))
    }

    /// Number of flat array elements, `None` for a scalar.
    pub fn array_length(&self) -> Option<usize> {
        self.values().map(<[Value]>::len)
    }

    pub fn dimensions(&self) -> Option<&[i32]> {
        self.dimensions.as_deref()
    }

    /// The value of a scalar variant.
    pub fn value(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// The flat elements of an array variant.
    pub fn values(&self) -> Option<&[Value]> {
        match &self.payload {
            Payload::Array(values) => Some(values),
            _ => None,
        }
    }

    /// The single element of the payload: the scalar value, or the only
    /// element of a one-element array.
    pub fn scalar(&self) -> Option<&Value> {
        match &self.payload {
            Payload::Scalar(value) => Some(value),
            Payload::Array(values) if values.len() == 1 => values.first(),
            _ => None,
        }
    }

    /// Looks up an element by its multi-dimensional index.
    ///
    /// Elements are stored row-major: the last index varies fastest. An
    /// array without dimensions is indexed as one-dimensional. Returns
    /// `None` for scalars, a wrong number of indexes, or any index out of
    /// range.
    pub fn get(&self, index: &[usize]) -> Option<&Value> {
        let values = self.values()?;
        let sizes = match &self.dimensions {
            Some(dimensions) => dimensions
                .iter()
                .map(|&size| usize::try_from(size).ok())
                .collect::<Option<Vec<_>>>()?,
            None => vec![values.len()],
        };
        if index.len() != sizes.len() {
            return None;
        }
        let mut flat = 0usize;
        for (&i, &size) in index.iter().zip(&sizes) {
            if i >= size {
                return None;
            }
            flat = flat.checked_mul(size)?.checked_add(i)?;
        }
        values.get(flat)
    }

    fn decode_body(decoder: &mut Decoder<'_>) -> Result<Self> {
        let mask = EncodingMask::from_bits(decoder.read_u8()?);
        let type_id = mask.type_id()?;
        let has_values = mask.has(EncodingMask::ARRAY_VALUES);
        if mask.has(EncodingMask::ARRAY_DIMENSIONS) && !has_values {
            return Err(Error::DimensionsWithoutValues(mask.bits()));
        }

        let payload = if has_values {
            let count = decoder.read_count("array length")?;
            // Every element takes at least one byte.
            let remaining = decoder.remaining();
            if count > remaining {
                return Err(Error::UnexpectedEnd { needed: count, remaining });
            }
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(Value::decode_as(type_id, decoder)?);
            }
            Payload::Array(values)
        } else {
            Payload::Scalar(Value::decode_as(type_id, decoder)?)
        };

        let dimensions = if mask.has(EncodingMask::ARRAY_DIMENSIONS) {
            let count = decoder.read_count("array dimensions")?;
            let remaining = decoder.remaining();
            if count.saturating_mul(4) > remaining {
                return Err(Error::UnexpectedEnd {
                    needed: count.saturating_mul(4),
                    remaining,
                });
            }
            let dimensions = (0..count)
                .map(|_| decoder.read_i32())
                .collect::<Result<Vec<_>>>()?;
            Some(dimensions)
        } else {
            None
        };

        Ok(Self { mask, payload, dimensions })
    }
}

impl BinaryCodec for Variant {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
        let top_level = decoder.depth() == 0;
        let start = decoder.position();
        let result = decoder.nested(Self::decode_body);
        if top_level {
            match &result {
                Ok(variant) => tracing::trace!(
                    mask = variant.mask.bits(),
                    consumed = decoder.position() - start,
                    "decoded variant"
                ),
                Err(err) => tracing::debug!(
                    position = decoder.position(),
                    error = %err,
                    "variant decode failed"
                ),
            }
        }
        result
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<()> {
        let values = match &self.payload {
            Payload::Empty => return Err(Error::EmptyVariant),
            Payload::Scalar(value) => slice::from_ref(value),
            Payload::Array(values) => values.as_slice(),
        };
        encoder.write_u8(self.mask.bits())?;
        if self.is_array() {
            encoder.write_count(values.len())?;
        }
        for value in values {
            value.encode(encoder)?;
        }
        if let Some(dimensions) = &self.dimensions {
            encoder.write_count(dimensions.len())?;
            for &size in dimensions {
                encoder.write_i32(size)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Empty => f.write_str("null"),
            Payload::Scalar(value) => write!(f, "{value}"),
            Payload::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

// ─────────────────────────── Runtime type lookup ────────────────────────────

/// Tries each supported type as a scalar and as a `Vec` of that type.
macro_rules! downcast_any {
    ($any:ident; $($ty:ty),+ $(,)?) => {
        $(
            if $any.is::<$ty>() {
                return Ok($any.downcast::<$ty>().ok().map(|v| Variant::new(*v)));
            }
            if $any.is::<Vec<$ty>>() {
                return Ok($any
                    .downcast::<Vec<$ty>>()
                    .ok()
                    .map(|values| Variant::from_array(*values)));
            }
        )+
    };
}

fn from_any(any: Box<dyn Any>) -> Result<Option<Variant>> {
    if any.is::<Value>() {
        return Ok(any.downcast::<Value>().ok().map(|v| Variant::new(*v)));
    }
    if any.is::<Vec<Value>>() {
        let Ok(values) = any.downcast::<Vec<Value>>() else {
            return Ok(None);
        };
        return match values.first().map(Value::type_id) {
            Some(type_id) => Variant::from_values(type_id, *values).map(Some),
            None => Ok(None),
        };
    }
    if any.is::<u8>() {
        return Ok(any.downcast::<u8>().ok().map(|v| Variant::new(*v)));
    }
    if any.is::<Vec<u8>>() {
        return Ok(any
            .downcast::<Vec<u8>>()
            .ok()
            .map(|bytes| Variant::new(ByteString::from(*bytes))));
    }
    downcast_any!(
        any;
        bool, i8, i16, u16, i32, u32, i64, u64, f32, f64, String, &'static str,
        DateTime, Guid, ByteString, XmlElement, NodeId, ExpandedNodeId,
        StatusCode, QualifiedName, LocalizedText, ExtensionObject, DataValue,
        Variant, DiagnosticInfo,
    );
    Ok(None)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[traced_test]
    #[test]
    fn top_level_failure_is_logged() {
        assert!(Variant::from_bytes(&[0x00]).is_err());
        assert!(logs_contain("variant decode failed"));
    }

    #[traced_test]
    #[test]
    fn deep_nesting_is_logged() {
        let limits = crate::DecodeLimits::default().with_max_depth(2);
        let bytes = [0x18, 0x18, 0x18, 0x06, 0x01, 0x00, 0x00, 0x00];
        let err = Variant::from_bytes_with_limits(&bytes, limits).unwrap_err();
        assert!(matches!(err, Error::NestingTooDeep(2)));
        assert!(logs_contain("nesting limit reached"));
        assert!(logs_contain("variant decode failed"));
    }
}
