//! Little-endian wire codec for PTP dataset payloads
//!
//! All multi-byte PTP fields are little-endian. Strings are UCS-2 LE with a
//! one-byte code-unit count that includes the terminating NUL; arrays carry
//! a four-byte element count. The [`PtpRead`] and [`PtpWrite`] extension
//! traits layer those shapes over any `std::io` cursor.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io;

use crate::types::{Error, PropertyValue, Result, TypeCode};

/// Reads past the end of an in-memory reply buffer are truncations, not
/// I/O failures.
fn eof_as_truncated(field: &'static str) -> impl FnOnce(io::Error) -> Error {
    move |e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::Truncated(field)
        } else {
            Error::Io(e)
        }
    }
}

/// PTP-shaped reads over a byte cursor.
pub trait PtpRead: io::Read {
    fn read_ptp_i8(&mut self) -> Result<i8> {
        self.read_i8().map_err(eof_as_truncated("i8"))
    }

    fn read_ptp_u8(&mut self) -> Result<u8> {
        self.read_u8().map_err(eof_as_truncated("u8"))
    }

    fn read_ptp_i16(&mut self) -> Result<i16> {
        self.read_i16::<LittleEndian>()
            .map_err(eof_as_truncated("i16"))
    }

    fn read_ptp_u16(&mut self) -> Result<u16> {
        self.read_u16::<LittleEndian>()
            .map_err(eof_as_truncated("u16"))
    }

    fn read_ptp_i32(&mut self) -> Result<i32> {
        self.read_i32::<LittleEndian>()
            .map_err(eof_as_truncated("i32"))
    }

    fn read_ptp_u32(&mut self) -> Result<u32> {
        self.read_u32::<LittleEndian>()
            .map_err(eof_as_truncated("u32"))
    }

    fn read_ptp_i64(&mut self) -> Result<i64> {
        self.read_i64::<LittleEndian>()
            .map_err(eof_as_truncated("i64"))
    }

    fn read_ptp_u64(&mut self) -> Result<u64> {
        self.read_u64::<LittleEndian>()
            .map_err(eof_as_truncated("u64"))
    }

    fn read_ptp_i128(&mut self) -> Result<i128> {
        self.read_i128::<LittleEndian>()
            .map_err(eof_as_truncated("i128"))
    }

    fn read_ptp_u128(&mut self) -> Result<u128> {
        self.read_u128::<LittleEndian>()
            .map_err(eof_as_truncated("u128"))
    }

    /// Read a PTP string: one length byte counting UCS-2 code units
    /// (terminating NUL included when present), then that many units. The
    /// trailing NUL is stripped; invalid code units decode as U+FFFD.
    fn read_ptp_string(&mut self) -> Result<String> {
        let len = self
            .read_u8()
            .map_err(eof_as_truncated("string length"))? as usize;
        let mut units = Vec::with_capacity(len);
        for _ in 0..len {
            units.push(
                self.read_u16::<LittleEndian>()
                    .map_err(eof_as_truncated("string body"))?,
            );
        }
        if units.last() == Some(&0) {
            units.pop();
        }
        Ok(char::decode_utf16(units)
            .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect())
    }

    /// Read a PTP array of u16: a four-byte element count, then the
    /// elements.
    fn read_ptp_u16_array(&mut self) -> Result<Vec<u16>> {
        let count = self
            .read_u32::<LittleEndian>()
            .map_err(eof_as_truncated("array count"))? as usize;
        // Cap the preallocation; a lying count still fails at the read below.
        let mut vals = Vec::with_capacity(count.min(4096));
        for _ in 0..count {
            vals.push(
                self.read_u16::<LittleEndian>()
                    .map_err(eof_as_truncated("array element"))?,
            );
        }
        Ok(vals)
    }

    /// Decode one value of the given wire type.
    fn read_ptp_value(&mut self, type_code: TypeCode) -> Result<PropertyValue> {
        Ok(match type_code {
            TypeCode::None => {
                return Err(Error::Malformed(
                    "cannot decode a value of type NONE".to_string(),
                ))
            }
            TypeCode::I8 => PropertyValue::I8(self.read_ptp_i8()?),
            TypeCode::U8 => PropertyValue::U8(self.read_ptp_u8()?),
            TypeCode::I16 => PropertyValue::I16(self.read_ptp_i16()?),
            TypeCode::U16 => PropertyValue::U16(self.read_ptp_u16()?),
            TypeCode::I32 => PropertyValue::I32(self.read_ptp_i32()?),
            TypeCode::U32 => PropertyValue::U32(self.read_ptp_u32()?),
            TypeCode::I64 => PropertyValue::I64(self.read_ptp_i64()?),
            TypeCode::U64 => PropertyValue::U64(self.read_ptp_u64()?),
            TypeCode::I128 => PropertyValue::I128(self.read_ptp_i128()?),
            TypeCode::U128 => PropertyValue::U128(self.read_ptp_u128()?),
            TypeCode::String => PropertyValue::String(self.read_ptp_string()?),
        })
    }
}

impl<R: io::Read + ?Sized> PtpRead for R {}

/// PTP-shaped writes, symmetric with [`PtpRead`].
pub trait PtpWrite: io::Write {
    /// Encode a PTP string. The length byte counts the trailing NUL this
    /// writes; the empty string is a single zero byte.
    fn write_ptp_string(&mut self, s: &str) -> Result<()> {
        if s.is_empty() {
            self.write_u8(0)?;
            return Ok(());
        }
        let units: Vec<u16> = s.encode_utf16().collect();
        if units.len() + 1 > u8::MAX as usize {
            return Err(Error::Malformed(format!(
                "string of {} UCS-2 units exceeds the PTP length byte",
                units.len()
            )));
        }
        self.write_u8((units.len() + 1) as u8)?;
        for unit in units {
            self.write_u16::<LittleEndian>(unit)?;
        }
        self.write_u16::<LittleEndian>(0)?;
        Ok(())
    }

    fn write_ptp_u16_array(&mut self, vals: &[u16]) -> Result<()> {
        self.write_u32::<LittleEndian>(vals.len() as u32)?;
        for &val in vals {
            self.write_u16::<LittleEndian>(val)?;
        }
        Ok(())
    }

    /// Encode one value with its wire type's layout.
    fn write_ptp_value(&mut self, val: &PropertyValue) -> Result<()> {
        match val {
            PropertyValue::None => {
                return Err(Error::Malformed(
                    "cannot encode a value of type NONE".to_string(),
                ))
            }
            PropertyValue::I8(v) => self.write_i8(*v)?,
            PropertyValue::U8(v) => self.write_u8(*v)?,
            PropertyValue::I16(v) => self.write_i16::<LittleEndian>(*v)?,
            PropertyValue::U16(v) => self.write_u16::<LittleEndian>(*v)?,
            PropertyValue::I32(v) => self.write_i32::<LittleEndian>(*v)?,
            PropertyValue::U32(v) => self.write_u32::<LittleEndian>(*v)?,
            PropertyValue::I64(v) => self.write_i64::<LittleEndian>(*v)?,
            PropertyValue::U64(v) => self.write_u64::<LittleEndian>(*v)?,
            PropertyValue::I128(v) => self.write_i128::<LittleEndian>(*v)?,
            PropertyValue::U128(v) => self.write_u128::<LittleEndian>(*v)?,
            PropertyValue::String(s) => self.write_ptp_string(s)?,
        }
        Ok(())
    }
}

impl<W: io::Write + ?Sized> PtpWrite for W {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode_value(val: &PropertyValue) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.write_ptp_value(val).unwrap();
        buf
    }

    #[test]
    fn u32_is_little_endian() {
        assert_eq!(
            encode_value(&PropertyValue::U32(0x0102_0304)),
            [0x04, 0x03, 0x02, 0x01]
        );
        let mut cur = Cursor::new([0x04u8, 0x03, 0x02, 0x01]);
        assert_eq!(cur.read_ptp_u32().unwrap(), 0x0102_0304);
    }

    #[test]
    fn u128_is_lsb_first() {
        let bytes = encode_value(&PropertyValue::U128(1));
        assert_eq!(bytes.len(), 16);
        assert_eq!(bytes[0], 1);
        assert!(bytes[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn round_trip_every_type() {
        let samples = [
            PropertyValue::I8(-5),
            PropertyValue::U8(250),
            PropertyValue::I16(-2000),
            PropertyValue::U16(0x5007),
            PropertyValue::I32(-70_000),
            PropertyValue::U32(0xffff_ffff),
            PropertyValue::I64(-1),
            PropertyValue::U64(u64::MAX),
            PropertyValue::I128(-(1i128 << 100)),
            PropertyValue::U128(1u128 << 100),
            PropertyValue::from("NIKON D5100"),
        ];
        for val in samples {
            let bytes = encode_value(&val);
            let mut cur = Cursor::new(bytes.as_slice());
            assert_eq!(cur.read_ptp_value(val.type_code()).unwrap(), val);
            assert_eq!(cur.position() as usize, bytes.len());
        }
    }

    #[test]
    fn empty_string_is_a_single_zero_byte() {
        let mut buf = Vec::new();
        buf.write_ptp_string("").unwrap();
        assert_eq!(buf, [0x00]);

        let mut cur = Cursor::new([0x00u8]);
        assert_eq!(cur.read_ptp_string().unwrap(), "");
    }

    #[test]
    fn string_length_counts_the_trailing_nul() {
        let mut buf = Vec::new();
        buf.write_ptp_string("Nikon").unwrap();
        assert_eq!(buf[0], 6);
        assert_eq!(buf.len(), 1 + 6 * 2);
        assert_eq!(&buf[buf.len() - 2..], [0x00, 0x00]);
    }

    #[test]
    fn decode_strips_the_nul_but_tolerates_its_absence() {
        // "Nikon" without a terminator, as some firmware sends it.
        let raw = [
            0x05, 0x4e, 0x00, 0x69, 0x00, 0x6b, 0x00, 0x6f, 0x00, 0x6e, 0x00,
        ];
        let mut cur = Cursor::new(raw.as_slice());
        assert_eq!(cur.read_ptp_string().unwrap(), "Nikon");

        let mut terminated = Vec::new();
        terminated.write_ptp_string("Nikon").unwrap();
        let mut cur = Cursor::new(terminated.as_slice());
        assert_eq!(cur.read_ptp_string().unwrap(), "Nikon");
    }

    #[test]
    fn lone_surrogate_decodes_as_replacement() {
        // Length 1, single unpaired high surrogate 0xD800.
        let raw = [0x01, 0x00, 0xd8];
        let mut cur = Cursor::new(raw.as_slice());
        assert_eq!(cur.read_ptp_string().unwrap(), "\u{fffd}");
    }

    #[test]
    fn short_reads_fail_with_truncated() {
        let mut cur = Cursor::new([0x01u8].as_slice());
        assert!(matches!(cur.read_ptp_u32(), Err(Error::Truncated("u32"))));

        // Declares 3 code units but carries only one.
        let raw = [0x03, 0x41, 0x00];
        let mut cur = Cursor::new(raw.as_slice());
        assert!(matches!(
            cur.read_ptp_string(),
            Err(Error::Truncated("string body"))
        ));
    }

    #[test]
    fn u16_array_round_trip() {
        let vals = [0x1001u16, 0x1014, 0x1015, 0x1016];
        let mut buf = Vec::new();
        buf.write_ptp_u16_array(&vals).unwrap();
        assert_eq!(buf.len(), 4 + vals.len() * 2);
        assert_eq!(&buf[..4], [0x04, 0x00, 0x00, 0x00]);

        let mut cur = Cursor::new(buf.as_slice());
        assert_eq!(cur.read_ptp_u16_array().unwrap(), vals);
    }

    #[test]
    fn array_count_beyond_buffer_fails() {
        let raw = [0xff, 0xff, 0xff, 0xff, 0x01, 0x00];
        let mut cur = Cursor::new(raw.as_slice());
        assert!(matches!(
            cur.read_ptp_u16_array(),
            Err(Error::Truncated("array element"))
        ));
    }

    #[test]
    fn oversized_string_refuses_to_encode() {
        let long = "x".repeat(300);
        let mut buf = Vec::new();
        assert!(matches!(
            buf.write_ptp_string(&long),
            Err(Error::Malformed(_))
        ));
    }
}
