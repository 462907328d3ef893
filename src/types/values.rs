//! Property value types and conversion utilities
//!
//! This module defines the core `PropertyValue` enum that represents all
//! possible PTP device property values, along with its typed accessors and
//! display formatting.

use crate::types::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// PTP datatype codes as carried in `DevicePropDesc` datasets.
///
/// The numeric encoding is wire-normative (PTP 1.1 table 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum TypeCode {
    #[default]
    None,
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    I128,
    U128,
    String,
}

impl TypeCode {
    /// Decode a wire datatype code. Unknown codes yield `None` so callers
    /// can reject descriptors that embed types we do not model.
    pub fn from_u16(raw: u16) -> Option<TypeCode> {
        match raw {
            0x0000 => Some(TypeCode::None),
            0x0001 => Some(TypeCode::I8),
            0x0002 => Some(TypeCode::U8),
            0x0003 => Some(TypeCode::I16),
            0x0004 => Some(TypeCode::U16),
            0x0005 => Some(TypeCode::I32),
            0x0006 => Some(TypeCode::U32),
            0x0007 => Some(TypeCode::I64),
            0x0008 => Some(TypeCode::U64),
            0x0009 => Some(TypeCode::I128),
            0x000a => Some(TypeCode::U128),
            0xffff => Some(TypeCode::String),
            _ => None,
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            TypeCode::None => 0x0000,
            TypeCode::I8 => 0x0001,
            TypeCode::U8 => 0x0002,
            TypeCode::I16 => 0x0003,
            TypeCode::U16 => 0x0004,
            TypeCode::I32 => 0x0005,
            TypeCode::U32 => 0x0006,
            TypeCode::I64 => 0x0007,
            TypeCode::U64 => 0x0008,
            TypeCode::I128 => 0x0009,
            TypeCode::U128 => 0x000a,
            TypeCode::String => 0xffff,
        }
    }

    /// Encoded size in bytes for fixed-width types; `None` for strings and
    /// the `None` type.
    pub fn wire_size(self) -> Option<usize> {
        match self {
            TypeCode::I8 | TypeCode::U8 => Some(1),
            TypeCode::I16 | TypeCode::U16 => Some(2),
            TypeCode::I32 | TypeCode::U32 => Some(4),
            TypeCode::I64 | TypeCode::U64 => Some(8),
            TypeCode::I128 | TypeCode::U128 => Some(16),
            TypeCode::None | TypeCode::String => None,
        }
    }
}

/// Shape of a property's allowed values (`DevicePropDesc` form flag).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FormCode {
    #[default]
    None,
    Range,
    Enum,
}

impl FormCode {
    /// Form flags other than RANGE and ENUM are treated as NONE.
    pub fn from_u8(raw: u8) -> FormCode {
        match raw {
            0x01 => FormCode::Range,
            0x02 => FormCode::Enum,
            _ => FormCode::None,
        }
    }

    pub fn to_u8(self) -> u8 {
        match self {
            FormCode::None => 0x00,
            FormCode::Range => 0x01,
            FormCode::Enum => 0x02,
        }
    }
}

/// A single device property value of any PTP datatype.
///
/// Properties are typed per-device, so callers generally do not know the
/// datatype a priori; this tagged representation carries the type alongside
/// the payload. Accessors demand exact tag equality; there is no implicit
/// numeric widening between variants.
///
/// Equality is only meaningful between values of identical tag:
/// `PropertyValue::U8(5) != PropertyValue::U16(5)`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PropertyValue {
    /// No value; the state of every property before it has been probed.
    #[default]
    None,
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    I128(i128),
    U128(u128),
    String(String),
}

macro_rules! typed_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(&self) -> Result<$ty> {
            match self {
                PropertyValue::$variant(v) => Ok(*v),
                other => Err(Error::TypeMismatch {
                    expected: TypeCode::$variant,
                    actual: other.type_code(),
                }),
            }
        }
    };
}

impl PropertyValue {
    /// The tag of the currently held value.
    pub fn type_code(&self) -> TypeCode {
        match self {
            PropertyValue::None => TypeCode::None,
            PropertyValue::I8(_) => TypeCode::I8,
            PropertyValue::U8(_) => TypeCode::U8,
            PropertyValue::I16(_) => TypeCode::I16,
            PropertyValue::U16(_) => TypeCode::U16,
            PropertyValue::I32(_) => TypeCode::I32,
            PropertyValue::U32(_) => TypeCode::U32,
            PropertyValue::I64(_) => TypeCode::I64,
            PropertyValue::U64(_) => TypeCode::U64,
            PropertyValue::I128(_) => TypeCode::I128,
            PropertyValue::U128(_) => TypeCode::U128,
            PropertyValue::String(_) => TypeCode::String,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PropertyValue::None)
    }

    /// Drop any held payload and reset the tag to `None`.
    pub fn clear(&mut self) {
        *self = PropertyValue::None;
    }

    typed_accessor!(as_i8, I8, i8);
    typed_accessor!(as_u8, U8, u8);
    typed_accessor!(as_i16, I16, i16);
    typed_accessor!(as_u16, U16, u16);
    typed_accessor!(as_i32, I32, i32);
    typed_accessor!(as_u32, U32, u32);
    typed_accessor!(as_i64, I64, i64);
    typed_accessor!(as_u64, U64, u64);
    typed_accessor!(as_i128, I128, i128);
    typed_accessor!(as_u128, U128, u128);

    pub fn as_str(&self) -> Result<&str> {
        match self {
            PropertyValue::String(s) => Ok(s),
            other => Err(Error::TypeMismatch {
                expected: TypeCode::String,
                actual: other.type_code(),
            }),
        }
    }

    /// Uniform numeric view of any 8–64 bit variant as a `u64` bit pattern
    /// (signed values sign-extend). Fails for `String`, 128-bit and `None`
    /// values.
    pub fn to_u64(&self) -> Result<u64> {
        match self {
            PropertyValue::I8(v) => Ok(*v as u64),
            PropertyValue::U8(v) => Ok(u64::from(*v)),
            PropertyValue::I16(v) => Ok(*v as u64),
            PropertyValue::U16(v) => Ok(u64::from(*v)),
            PropertyValue::I32(v) => Ok(*v as u64),
            PropertyValue::U32(v) => Ok(u64::from(*v)),
            PropertyValue::I64(v) => Ok(*v as u64),
            PropertyValue::U64(v) => Ok(*v),
            other => Err(Error::TypeMismatch {
                expected: TypeCode::U64,
                actual: other.type_code(),
            }),
        }
    }

    /// Signed companion of [`PropertyValue::to_u64`].
    pub fn to_i64(&self) -> Result<i64> {
        self.to_u64().map(|v| v as i64).map_err(|e| match e {
            Error::TypeMismatch { actual, .. } => Error::TypeMismatch {
                expected: TypeCode::I64,
                actual,
            },
            other => other,
        })
    }
}

impl From<i8> for PropertyValue {
    fn from(v: i8) -> Self {
        PropertyValue::I8(v)
    }
}

impl From<u8> for PropertyValue {
    fn from(v: u8) -> Self {
        PropertyValue::U8(v)
    }
}

impl From<i16> for PropertyValue {
    fn from(v: i16) -> Self {
        PropertyValue::I16(v)
    }
}

impl From<u16> for PropertyValue {
    fn from(v: u16) -> Self {
        PropertyValue::U16(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::I32(v)
    }
}

impl From<u32> for PropertyValue {
    fn from(v: u32) -> Self {
        PropertyValue::U32(v)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::I64(v)
    }
}

impl From<u64> for PropertyValue {
    fn from(v: u64) -> Self {
        PropertyValue::U64(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        PropertyValue::String(v.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(v: String) -> Self {
        PropertyValue::String(v)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::None => f.write_str("(none)"),
            PropertyValue::I8(v) => write!(f, "{v}"),
            PropertyValue::U8(v) => write!(f, "{v}"),
            PropertyValue::I16(v) => write!(f, "{v}"),
            PropertyValue::U16(v) => write!(f, "{v}"),
            PropertyValue::I32(v) => write!(f, "{v}"),
            PropertyValue::U32(v) => write!(f, "{v}"),
            PropertyValue::I64(v) => write!(f, "{v}"),
            PropertyValue::U64(v) => write!(f, "{v}"),
            PropertyValue::I128(v) => write!(f, "{v}"),
            PropertyValue::U128(v) => write!(f, "{v}"),
            PropertyValue::String(s) => f.write_str(s),
        }
    }
}

impl Serialize for PropertyValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PropertyValue::None => serializer.serialize_unit(),
            PropertyValue::I8(v) => serializer.serialize_i8(*v),
            PropertyValue::U8(v) => serializer.serialize_u8(*v),
            PropertyValue::I16(v) => serializer.serialize_i16(*v),
            PropertyValue::U16(v) => serializer.serialize_u16(*v),
            PropertyValue::I32(v) => serializer.serialize_i32(*v),
            PropertyValue::U32(v) => serializer.serialize_u32(*v),
            PropertyValue::I64(v) => serializer.serialize_i64(*v),
            PropertyValue::U64(v) => serializer.serialize_u64(*v),
            PropertyValue::I128(v) => serializer.serialize_i128(*v),
            PropertyValue::U128(v) => serializer.serialize_u128(*v),
            PropertyValue::String(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_discipline() {
        let val = PropertyValue::U8(5);
        assert_eq!(val.as_u8().unwrap(), 5);
        assert!(matches!(
            val.as_u16(),
            Err(Error::TypeMismatch {
                expected: TypeCode::U16,
                actual: TypeCode::U8,
            })
        ));
        assert!(matches!(
            val.as_str(),
            Err(Error::TypeMismatch { .. })
        ));
    }

    #[test]
    fn equality_demands_identical_tags() {
        assert_eq!(PropertyValue::None, PropertyValue::None);
        assert_ne!(PropertyValue::U8(5), PropertyValue::U16(5));
        assert_eq!(PropertyValue::U16(5), PropertyValue::U16(5));
        assert_eq!(
            PropertyValue::from("Nikon"),
            PropertyValue::String("Nikon".to_string())
        );
    }

    #[test]
    fn clear_resets_to_none() {
        let mut val = PropertyValue::from("D5100");
        assert_eq!(val.type_code(), TypeCode::String);
        val.clear();
        assert!(val.is_none());
        assert!(matches!(val.as_str(), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn uniform_numeric_view() {
        assert_eq!(PropertyValue::U8(200).to_u64().unwrap(), 200);
        assert_eq!(PropertyValue::I16(-1).to_i64().unwrap(), -1);
        assert_eq!(PropertyValue::I16(-1).to_u64().unwrap(), u64::MAX);
        assert!(PropertyValue::from("1").to_u64().is_err());
        assert!(PropertyValue::U128(1).to_u64().is_err());
        assert!(PropertyValue::None.to_i64().is_err());
    }

    #[test]
    fn type_code_round_trip() {
        for raw in [0x0000u16, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0xffff] {
            let tc = TypeCode::from_u16(raw).unwrap();
            assert_eq!(tc.to_u16(), raw);
        }
        assert_eq!(TypeCode::from_u16(0x000b), None);
        assert_eq!(TypeCode::from_u16(0x4002), None);
    }

    #[test]
    fn form_code_from_wire() {
        assert_eq!(FormCode::from_u8(0), FormCode::None);
        assert_eq!(FormCode::from_u8(1), FormCode::Range);
        assert_eq!(FormCode::from_u8(2), FormCode::Enum);
        assert_eq!(FormCode::from_u8(9), FormCode::None);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(PropertyValue::U16(280).to_string(), "280");
        assert_eq!(PropertyValue::I8(-4).to_string(), "-4");
        assert_eq!(PropertyValue::from("Auto").to_string(), "Auto");
        assert_eq!(PropertyValue::None.to_string(), "(none)");
    }

    #[test]
    fn serializes_as_plain_json_values() {
        assert_eq!(
            serde_json::to_string(&PropertyValue::U16(280)).unwrap(),
            "280"
        );
        assert_eq!(
            serde_json::to_string(&PropertyValue::from("Nikon")).unwrap(),
            "\"Nikon\""
        );
        assert_eq!(
            serde_json::to_string(&PropertyValue::None).unwrap(),
            "null"
        );
    }
}
