//! The parsed GetDeviceInfo dataset
//!
//! Field order follows the PTP 1.1 DeviceInfo layout exactly; the whole
//! dataset is consumed front to back with the wire codec.

use crate::codec::PtpRead;
use crate::types::Result;
use serde::Serialize;
use std::io::Cursor;

/// Everything a device says about itself in reply to GetDeviceInfo.
///
/// Listing order of the supported-code arrays is the device's own and is
/// preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceInfo {
    pub standard_version: u16,
    pub vendor_extension_id: u32,
    pub vendor_extension_version: u16,
    pub vendor_extension_description: String,
    pub functional_mode: u16,
    pub operations_supported: Vec<u16>,
    pub events_supported: Vec<u16>,
    pub properties_supported: Vec<u16>,
    pub capture_formats: Vec<u16>,
    pub image_formats: Vec<u16>,
    pub manufacturer: String,
    pub model: String,
    pub device_version: String,
    pub serial_number: String,
}

impl DeviceInfo {
    pub fn decode(data: &[u8]) -> Result<DeviceInfo> {
        let mut cur = Cursor::new(data);
        Ok(DeviceInfo {
            standard_version: cur.read_ptp_u16()?,
            vendor_extension_id: cur.read_ptp_u32()?,
            vendor_extension_version: cur.read_ptp_u16()?,
            vendor_extension_description: cur.read_ptp_string()?,
            functional_mode: cur.read_ptp_u16()?,
            operations_supported: cur.read_ptp_u16_array()?,
            events_supported: cur.read_ptp_u16_array()?,
            properties_supported: cur.read_ptp_u16_array()?,
            capture_formats: cur.read_ptp_u16_array()?,
            image_formats: cur.read_ptp_u16_array()?,
            manufacturer: read_trailing_string(&mut cur)?,
            model: read_trailing_string(&mut cur)?,
            device_version: read_trailing_string(&mut cur)?,
            serial_number: read_trailing_string(&mut cur)?,
        })
    }
}

/// Real firmware truncates the tail of the dataset surprisingly often. A
/// string field that starts exactly at the end of the reply decodes as
/// empty; truncation inside a string still fails.
fn read_trailing_string(cur: &mut Cursor<&[u8]>) -> Result<String> {
    if cur.position() as usize >= cur.get_ref().len() {
        return Ok(String::new());
    }
    cur.read_ptp_string()
}
