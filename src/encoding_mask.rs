use crate::{Result, TypeId};

const TYPE_ID_BITS: u8 = 0x3F;

/// The leading byte of an encoded [`Variant`](crate::Variant).
///
/// Bits 0-5 hold the built-in type id, bit 6 flags a trailing list of array
/// dimensions and bit 7 flags an array of values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EncodingMask(u8);

impl EncodingMask {
    /// Set when array dimensions follow the values.
    pub const ARRAY_DIMENSIONS: u8 = 0x40;
    /// Set when the payload is an array.
    pub const ARRAY_VALUES: u8 = 0x80;

    /// Wraps a raw mask byte as read from the wire.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// The raw mask byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// A mask for a single value of the given type.
    pub fn scalar(type_id: TypeId) -> Self {
        Self(type_id.as_u8())
    }

    /// A mask for a one-dimensional array of the given type.
    pub fn array(type_id: TypeId) -> Self {
        Self(type_id.as_u8() | Self::ARRAY_VALUES)
    }

    /// The raw type id bits, which may name no known type.
    pub fn type_id_bits(self) -> u8 {
        self.0 & TYPE_ID_BITS
    }

    /// The type id, or `UnknownTypeId` for 0 and anything above 25.
    pub fn type_id(self) -> Result<TypeId> {
        TypeId::from_u8(self.type_id_bits())
    }

    /// Replaces the whole mask with `type_id`, clearing both shape flags.
    pub fn set_type_id(&mut self, type_id: TypeId) {
        self.0 = type_id.as_u8();
    }

    /// True when every bit of `flag` is set.
    pub fn has(self, flag: u8) -> bool {
        self.0 & flag == flag
    }

    /// Sets or clears `flag`, leaving the type id alone.
    pub fn set(&mut self, flag: u8, on: bool) {
        if on {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

impl From<u8> for EncodingMask {
    fn from(bits: u8) -> Self { Self(bits) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_type_and_flags() {
        let mask = EncodingMask::from_bits(0xC6);
        assert_eq!(mask.type_id_bits(), 6);
        assert_eq!(mask.type_id().unwrap(), TypeId::Int32);
        assert!(mask.has(EncodingMask::ARRAY_VALUES));
        assert!(mask.has(EncodingMask::ARRAY_DIMENSIONS));
        assert!(mask.has(EncodingMask::ARRAY_VALUES | EncodingMask::ARRAY_DIMENSIONS));
    }

    #[test]
    fn set_type_id_clears_flags() {
        let mut mask = EncodingMask::array(TypeId::Double);
        mask.set(EncodingMask::ARRAY_DIMENSIONS, true);
        mask.set_type_id(TypeId::String);
        assert_eq!(mask.bits(), 12);
        assert!(!mask.has(EncodingMask::ARRAY_VALUES));
    }

    #[test]
    fn set_flag_keeps_type() {
        let mut mask = EncodingMask::scalar(TypeId::Byte);
        mask.set(EncodingMask::ARRAY_VALUES, true);
        assert_eq!(mask.bits(), 0x83);
        mask.set(EncodingMask::ARRAY_VALUES, false);
        assert_eq!(mask.bits(), 0x03);
    }
}
