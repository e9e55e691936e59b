//! Best-effort coercions out of a [`Variant`].
//!
//! These never fail. A kind they do not understand, an empty variant, or an
//! array of more than one element all produce the zero value of the target
//! type, so a zero result says nothing about what the variant holds. Check
//! [`Variant::type_id`] when the kind matters.

use crate::{DateTime, Value, Variant};

impl Variant {
    /// Text of a `String`, the text of a `LocalizedText` or the name of a
    /// `QualifiedName`; `""` otherwise.
    pub fn as_string(&self) -> &str {
        match self.scalar() {
            Some(Value::String(s)) => s.as_str(),
            Some(Value::LocalizedText(text)) => text.as_str(),
            Some(Value::QualifiedName(name)) => name.name.as_str(),
            _ => "",
        }
    }

    pub fn as_bool(&self) -> bool {
        matches!(self.scalar(), Some(Value::Boolean(true)))
    }

    /// `Float` widened to `f64`, or `Double`; `0.0` otherwise.
    pub fn as_float(&self) -> f64 {
        match self.scalar() {
            Some(Value::Float(v)) => f64::from(*v),
            Some(Value::Double(v)) => *v,
            _ => 0.0,
        }
    }

    /// Any signed integer kind widened to `i64`; `0` otherwise.
    pub fn as_signed_int(&self) -> i64 {
        match self.scalar() {
            Some(Value::SByte(v)) => i64::from(*v),
            Some(Value::Int16(v)) => i64::from(*v),
            Some(Value::Int32(v)) => i64::from(*v),
            Some(Value::Int64(v)) => *v,
            _ => 0,
        }
    }

    /// Any unsigned integer kind widened to `u64`; `0` otherwise.
    pub fn as_unsigned_int(&self) -> u64 {
        match self.scalar() {
            Some(Value::Byte(v)) => u64::from(*v),
            Some(Value::UInt16(v)) => u64::from(*v),
            Some(Value::UInt32(v)) => u64::from(*v),
            Some(Value::UInt64(v)) => *v,
            _ => 0,
        }
    }

    /// A `DateTime`; [`DateTime::MIN`] otherwise.
    pub fn as_timestamp(&self) -> DateTime {
        match self.scalar() {
            Some(Value::DateTime(v)) => *v,
            _ => DateTime::MIN,
        }
    }
}
