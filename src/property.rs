//! Device property descriptors
//!
//! One `PropertyInfo` per property code the device listed. Descriptors
//! start out empty and are filled in from GetDevicePropDesc datasets as
//! properties are probed.

use crate::codec::PtpRead;
use crate::types::{Error, FormCode, PropertyValue, Result, TypeCode};
use serde::Serialize;
use std::io::Cursor;

/// Parsed DevicePropDesc dataset for a single property.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertyInfo {
    /// `TypeCode::None` until the property has been probed.
    pub type_code: TypeCode,
    /// Raw GetSet flag: 1 is get-only, 2 is get/set. Anything else reads
    /// as get-only.
    pub get_set: u8,
    pub form: FormCode,
    pub factory: PropertyValue,
    pub current: PropertyValue,
    /// `[min, max, step]` when `form` is RANGE, or the device-ordered list
    /// of possible values when ENUM. Order carries the index semantics the
    /// UI layer relies on.
    pub range: Vec<PropertyValue>,
}

impl PropertyInfo {
    pub fn is_settable(&self) -> bool {
        self.get_set == 2
    }

    /// Parse a GetDevicePropDesc dataset. Returns the property code the
    /// device echoed alongside the descriptor so the caller can verify it
    /// against the code it asked about.
    pub fn decode(data: &[u8]) -> Result<(u16, PropertyInfo)> {
        let mut cur = Cursor::new(data);

        let prop_code = cur.read_ptp_u16()?;
        let raw_type = cur.read_ptp_u16()?;
        let type_code = TypeCode::from_u16(raw_type).ok_or_else(|| {
            Error::Malformed(format!(
                "descriptor embeds unsupported datatype 0x{raw_type:04x}"
            ))
        })?;
        if type_code == TypeCode::None {
            return Err(Error::Malformed(
                "descriptor declares datatype NONE".to_string(),
            ));
        }
        let get_set = cur.read_ptp_u8()?;

        let factory = cur.read_ptp_value(type_code)?;
        let current = cur.read_ptp_value(type_code)?;
        // 64- and 128-bit defaults are decoded only to keep the cursor
        // aligned; no property in the supported standard set carries them,
        // so they are not cached.
        let (factory, current) = if is_wide_int(type_code) {
            (PropertyValue::None, PropertyValue::None)
        } else {
            (factory, current)
        };

        let form = FormCode::from_u8(cur.read_ptp_u8()?);
        let range = match form {
            FormCode::None => Vec::new(),
            FormCode::Range => vec![
                cur.read_ptp_value(type_code)?, // min
                cur.read_ptp_value(type_code)?, // max
                cur.read_ptp_value(type_code)?, // step
            ],
            FormCode::Enum => {
                let count = cur.read_ptp_u16()? as usize;
                let mut vals = Vec::with_capacity(count.min(4096));
                for _ in 0..count {
                    vals.push(cur.read_ptp_value(type_code)?);
                }
                vals
            }
        };

        Ok((
            prop_code,
            PropertyInfo {
                type_code,
                get_set,
                form,
                factory,
                current,
                range,
            },
        ))
    }
}

fn is_wide_int(type_code: TypeCode) -> bool {
    matches!(
        type_code,
        TypeCode::I64 | TypeCode::U64 | TypeCode::I128 | TypeCode::U128
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn u8_range_descriptor() {
        // BatteryLevel: u8, get-only, RANGE 0..100 step 1, factory 100,
        // current 37.
        let raw: &[u8] = &[
            0x01, 0x50, // property code
            0x02, 0x00, // datatype u8
            0x01, // get-only
            100,  // factory
            37,   // current
            0x01, // RANGE
            0, 100, 1, // min, max, step
        ];
        let (code, info) = PropertyInfo::decode(raw).unwrap();
        assert_eq!(code, 0x5001);
        assert_eq!(info.type_code, TypeCode::U8);
        assert!(!info.is_settable());
        assert_eq!(info.form, FormCode::Range);
        assert_eq!(info.factory, PropertyValue::U8(100));
        assert_eq!(info.current, PropertyValue::U8(37));
        assert_eq!(
            info.range,
            vec![
                PropertyValue::U8(0),
                PropertyValue::U8(100),
                PropertyValue::U8(1)
            ]
        );
    }

    #[test]
    fn u16_enum_descriptor_preserves_device_order() {
        // WhiteBalance: u16, get/set, ENUM {2, 4, 5, 0x8010}.
        let raw: &[u8] = &[
            0x05, 0x50, // property code
            0x04, 0x00, // datatype u16
            0x02, // get/set
            0x02, 0x00, // factory
            0x04, 0x00, // current
            0x02, // ENUM
            0x04, 0x00, // four entries
            0x02, 0x00, 0x04, 0x00, 0x05, 0x00, 0x10, 0x80,
        ];
        let (code, info) = PropertyInfo::decode(raw).unwrap();
        assert_eq!(code, 0x5005);
        assert!(info.is_settable());
        assert_eq!(info.form, FormCode::Enum);
        assert_eq!(
            info.range,
            vec![
                PropertyValue::U16(0x0002),
                PropertyValue::U16(0x0004),
                PropertyValue::U16(0x0005),
                PropertyValue::U16(0x8010),
            ]
        );
        // Every element shares the descriptor's tag.
        assert!(info.range.iter().all(|v| v.type_code() == info.type_code));
    }

    #[test]
    fn string_descriptor() {
        let mut raw = vec![
            0x1e, 0x50, // property code (Artist)
            0xff, 0xff, // datatype string
            0x02, // get/set
        ];
        for s in ["factory", "me"] {
            raw.push((s.len() + 1) as u8);
            for unit in s.encode_utf16() {
                raw.extend_from_slice(&unit.to_le_bytes());
            }
            raw.extend_from_slice(&[0, 0]);
        }
        raw.push(0x00); // form NONE

        let (code, info) = PropertyInfo::decode(&raw).unwrap();
        assert_eq!(code, 0x501e);
        assert_eq!(info.factory, PropertyValue::from("factory"));
        assert_eq!(info.current, PropertyValue::from("me"));
        assert_eq!(info.form, FormCode::None);
        assert!(info.range.is_empty());
    }

    #[test]
    fn wide_integer_defaults_stay_unpopulated() {
        // u64 property: factory/current are skipped over, not cached, and
        // the form flag after them still parses from the right offset.
        let mut raw = vec![
            0x3f, 0xd1, // vendor property code
            0x08, 0x00, // datatype u64
            0x01, // get-only
        ];
        raw.extend_from_slice(&7u64.to_le_bytes()); // factory
        raw.extend_from_slice(&9u64.to_le_bytes()); // current
        raw.push(0x02); // ENUM
        raw.extend_from_slice(&2u16.to_le_bytes());
        raw.extend_from_slice(&7u64.to_le_bytes());
        raw.extend_from_slice(&9u64.to_le_bytes());

        let (_, info) = PropertyInfo::decode(&raw).unwrap();
        assert_eq!(info.type_code, TypeCode::U64);
        assert_eq!(info.factory, PropertyValue::None);
        assert_eq!(info.current, PropertyValue::None);
        assert_eq!(
            info.range,
            vec![PropertyValue::U64(7), PropertyValue::U64(9)]
        );
    }

    #[test]
    fn unsupported_datatype_is_malformed() {
        let raw: &[u8] = &[0x05, 0x50, 0x4a, 0x00, 0x01];
        assert!(matches!(
            PropertyInfo::decode(raw),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn truncated_enum_body_fails() {
        let raw: &[u8] = &[
            0x05, 0x50, 0x04, 0x00, 0x02, // header
            0x02, 0x00, 0x04, 0x00, // factory, current
            0x02, // ENUM
            0x03, 0x00, // three entries claimed
            0x02, 0x00, // one present
        ];
        assert!(matches!(
            PropertyInfo::decode(raw),
            Err(Error::Truncated(_))
        ));
    }
}
