//! The PTP engine
//!
//! `PtpCamera` owns the parsed device model and the property descriptor
//! cache, and issues PTP commands through the [`Transport`] it is
//! parameterized over. Commands run strictly in program order; nothing is
//! retried, and non-OK device results are surfaced unchanged.
//!
//! Properties are probed lazily: `GetDeviceInfo` only lists their codes,
//! and the first access to a property issues `GetDevicePropDesc` to learn
//! its type, form and values.

use crate::codec::{PtpRead, PtpWrite};
use crate::device_info::DeviceInfo;
use crate::property::PropertyInfo;
use crate::tables;
use crate::transport::{opcode, response, response_code_string, Transport};
use crate::types::{Error, FormCode, PropertyValue, Result, TypeCode};
use indexmap::IndexMap;
use std::io::Cursor;
use tracing::{debug, trace};

/// Datasets (DeviceInfo, DevicePropDesc) fit comfortably in a KiB.
const RECV_DATASET: usize = 1024;
/// Capacity for string-typed property value reads.
const RECV_STRING: usize = 512;

/// One entry of a property's enumerated value list.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: String,
    pub value: PropertyValue,
}

/// A property's enumerated values plus the position of the current value.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyEnum {
    /// Entries in the order the device listed them.
    pub entries: Vec<LabeledValue>,
    /// Index of the entry equal to the cached current value. Defaults to 0
    /// when the current value matches no entry, so callers must tolerate
    /// the ambiguity with entry 0.
    pub current_index: usize,
}

/// High-level PTP device control over an externally supplied transport.
///
/// The engine owns the [`DeviceInfo`] model and the property cache
/// exclusively; external readers get immutable views between commands.
pub struct PtpCamera<T> {
    transport: T,
    info: DeviceInfo,
    properties: IndexMap<u16, PropertyInfo>,
}

impl<T: Transport> PtpCamera<T> {
    /// An engine with an empty model; call [`PtpCamera::initialize`] before
    /// anything else.
    pub fn new(transport: T) -> Self {
        PtpCamera {
            transport,
            info: DeviceInfo::default(),
            properties: IndexMap::new(),
        }
    }

    /// Issue `GetDeviceInfo` and populate the device model. Every property
    /// the device lists gets an empty descriptor, filled in on first
    /// access.
    pub fn initialize(&mut self) -> Result<()> {
        let reply =
            self.transport
                .send_command(opcode::GET_DEVICE_INFO, &[], None, RECV_DATASET)?;
        if reply.result_code != response::OK {
            return Err(Error::Device(reply.result_code));
        }

        self.info = DeviceInfo::decode(&reply.data)
            .map_err(|e| e.into_malformed("GetDeviceInfo dataset"))?;
        debug!(
            "device info: {} {} ({} operations, {} properties)",
            self.info.manufacturer,
            self.info.model,
            self.info.operations_supported.len(),
            self.info.properties_supported.len()
        );

        self.properties = self
            .info
            .properties_supported
            .iter()
            .map(|&code| (code, PropertyInfo::default()))
            .collect();
        Ok(())
    }

    /// The parsed device model, as of the last `initialize`.
    pub fn device_info(&self) -> &DeviceInfo {
        &self.info
    }

    pub fn standard_version(&self) -> u16 {
        self.info.standard_version
    }

    /// The vendor extension id, normalized unless `raw` is requested.
    ///
    /// Normalization papers over Nikon bodies that report Microsoft's id;
    /// pass `raw` to see what the device actually said.
    pub fn vendor_extension_id(&self, raw: bool) -> u32 {
        if raw {
            self.info.vendor_extension_id
        } else {
            tables::effective_vendor_id(self.info.vendor_extension_id, &self.info.manufacturer)
        }
    }

    pub fn extension_version(&self) -> u16 {
        self.info.vendor_extension_version
    }

    pub fn extension_description(&self) -> &str {
        &self.info.vendor_extension_description
    }

    pub fn functional_mode(&self) -> u16 {
        self.info.functional_mode
    }

    pub fn manufacturer(&self) -> &str {
        &self.info.manufacturer
    }

    pub fn model(&self) -> &str {
        &self.info.model
    }

    pub fn device_version(&self) -> &str {
        &self.info.device_version
    }

    pub fn serial_number(&self) -> &str {
        &self.info.serial_number
    }

    pub fn is_operation_supported(&self, code: u16) -> bool {
        self.info.operations_supported.contains(&code)
    }

    /// Supported operations by name, in device listing order.
    pub fn operations(&self) -> Vec<String> {
        let vendor = self.vendor_extension_id(false);
        self.info
            .operations_supported
            .iter()
            .map(|&code| tables::opcode_name(code, vendor))
            .collect()
    }

    /// Supported events by name, in device listing order.
    pub fn events(&self) -> Vec<String> {
        let vendor = self.vendor_extension_id(false);
        self.info
            .events_supported
            .iter()
            .map(|&code| tables::event_name(code, vendor))
            .collect()
    }

    /// Supported properties as `(code, name)` pairs, in device listing
    /// order.
    pub fn properties(&self) -> Vec<(u16, String)> {
        let vendor = self.vendor_extension_id(false);
        self.properties
            .keys()
            .map(|&code| (code, tables::property_name(code, vendor)))
            .collect()
    }

    pub fn capture_formats(&self) -> Vec<String> {
        self.info
            .capture_formats
            .iter()
            .map(|&code| tables::object_format_name(code))
            .collect()
    }

    pub fn image_formats(&self) -> Vec<String> {
        self.info
            .image_formats
            .iter()
            .map(|&code| tables::object_format_name(code))
            .collect()
    }

    /// Cached type of a property; `TypeCode::None` when the property is
    /// unknown or not yet probed.
    pub fn property_type_code(&self, code: u16) -> TypeCode {
        self.properties
            .get(&code)
            .map(|info| info.type_code)
            .unwrap_or_default()
    }

    /// Cached form of a property; `FormCode::None` when unknown or not yet
    /// probed.
    pub fn property_form(&self, code: u16) -> FormCode {
        self.properties
            .get(&code)
            .map(|info| info.form)
            .unwrap_or_default()
    }

    pub fn is_property_settable(&self, code: u16) -> bool {
        self.properties
            .get(&code)
            .is_some_and(PropertyInfo::is_settable)
    }

    /// Issue `GetDevicePropDesc` and refresh the cached descriptor.
    ///
    /// A non-OK device result is returned unchanged and leaves the cache
    /// untouched.
    pub fn probe(&mut self, code: u16) -> Result<u32> {
        if !self.properties.contains_key(&code) {
            return Err(Error::UnknownProperty(code));
        }

        let reply = self.transport.send_command(
            opcode::GET_DEVICE_PROP_DESC,
            &[u32::from(code)],
            None,
            RECV_DATASET,
        )?;
        debug!(
            "GetDevicePropDesc(0x{:04x}) -> {}",
            code,
            response_code_string(reply.result_code)
        );
        if reply.result_code != response::OK {
            return Ok(reply.result_code);
        }

        let (echoed, parsed) = PropertyInfo::decode(&reply.data)
            .map_err(|e| e.into_malformed("DevicePropDesc dataset"))?;
        if echoed != code {
            return Err(Error::Malformed(format!(
                "descriptor echoes property 0x{echoed:04x}, requested 0x{code:04x}"
            )));
        }
        trace!(
            "  type {:?}, getset {}, form {:?}, {} range values",
            parsed.type_code,
            parsed.get_set,
            parsed.form,
            parsed.range.len()
        );
        self.properties.insert(code, parsed);
        Ok(reply.result_code)
    }

    /// Read the property's current value from the device, refresh the
    /// cache, and hand it back. Probes first when the property has not
    /// been described yet.
    pub fn current_value(&mut self, code: u16) -> Result<&PropertyValue> {
        if !self.properties.contains_key(&code) {
            return Err(Error::UnknownProperty(code));
        }

        if self.property_type_code(code) == TypeCode::None {
            trace!("property 0x{:04x} unprobed, describing it first", code);
            self.probe(code)?;
        }

        let type_code = self.property_type_code(code);
        if type_code == TypeCode::None {
            // The device refused to describe the property; the cached
            // empty value is all there is.
            return Ok(&self.properties[&code].current);
        }

        let capacity = match type_code {
            TypeCode::String => RECV_STRING,
            other => match other.wire_size() {
                Some(size) if size <= 4 => size,
                _ => {
                    return Err(Error::Malformed(format!(
                        "GetDevicePropValue unsupported for datatype {type_code:?}"
                    )))
                }
            },
        };

        let reply = self.transport.send_command(
            opcode::GET_DEVICE_PROP_VALUE,
            &[u32::from(code)],
            None,
            capacity,
        )?;
        if reply.result_code != response::OK {
            return Err(Error::Device(reply.result_code));
        }

        let mut cur = Cursor::new(reply.data.as_slice());
        let value = cur
            .read_ptp_value(type_code)
            .map_err(|e| e.into_malformed("GetDevicePropValue data"))?;
        trace!("GetDevicePropValue(0x{:04x}) = {}", code, value);

        let info = &mut self.properties[&code];
        info.current = value;
        Ok(&info.current)
    }

    /// The current value as of the last probe or read; no device traffic.
    pub fn cached_current(&self, code: u16) -> Result<&PropertyValue> {
        self.properties
            .get(&code)
            .map(|info| &info.current)
            .ok_or(Error::UnknownProperty(code))
    }

    /// The factory default as of the last probe; no device traffic.
    pub fn factory_value(&self, code: u16) -> Result<&PropertyValue> {
        self.properties
            .get(&code)
            .map(|info| &info.factory)
            .ok_or(Error::UnknownProperty(code))
    }

    /// The enumerated values of a property with human-readable labels, or
    /// `None` when the property is unknown or not ENUM-formed.
    ///
    /// Labels resolve through the vendor tables with the normalized vendor
    /// id; string-typed enums label with the strings themselves.
    pub fn property_enum(&self, code: u16) -> Option<PropertyEnum> {
        let info = self.properties.get(&code)?;
        if info.form != FormCode::Enum {
            return None;
        }

        let vendor = self.vendor_extension_id(false);
        let entries: Vec<LabeledValue> = info
            .range
            .iter()
            .map(|value| {
                let label = match value {
                    PropertyValue::String(s) => s.clone(),
                    PropertyValue::U8(v) => tables::property_u8_label(code, *v, vendor),
                    PropertyValue::U16(v) => tables::property_u16_label(code, *v, vendor),
                    PropertyValue::U32(v) => tables::property_u32_label(code, *v, vendor),
                    other => other.to_string(),
                };
                LabeledValue {
                    label,
                    value: value.clone(),
                }
            })
            .collect();

        let current_index = entries
            .iter()
            .position(|entry| entry.value == info.current)
            .unwrap_or(0);

        Some(PropertyEnum {
            entries,
            current_index,
        })
    }

    /// The `(min, max, step)` of a RANGE-formed property, or `None` when
    /// the property is unknown or not RANGE-formed.
    pub fn property_range(
        &self,
        code: u16,
    ) -> Option<(PropertyValue, PropertyValue, PropertyValue)> {
        let info = self.properties.get(&code)?;
        if info.form != FormCode::Range || info.range.len() != 3 {
            return None;
        }
        Some((
            info.range[0].clone(),
            info.range[1].clone(),
            info.range[2].clone(),
        ))
    }

    /// Write a property value to the device. The value's tag must equal
    /// the cached type code, and the property must be settable; neither
    /// failure touches the transport.
    pub fn set_value(&mut self, code: u16, value: &PropertyValue) -> Result<u32> {
        let info = self
            .properties
            .get(&code)
            .ok_or(Error::UnknownProperty(code))?;
        if value.type_code() != info.type_code {
            return Err(Error::TypeMismatch {
                expected: info.type_code,
                actual: value.type_code(),
            });
        }
        if !info.is_settable() {
            return Err(Error::NotSettable(code));
        }

        let mut payload = Vec::new();
        payload.write_ptp_value(value)?;

        debug!("SetDevicePropValue(0x{:04x}, {})", code, value);
        let reply = self.transport.send_command(
            opcode::SET_DEVICE_PROP_VALUE,
            &[u32::from(code)],
            Some(&payload),
            0,
        )?;
        debug!("  -> {}", response_code_string(reply.result_code));
        Ok(reply.result_code)
    }

    /// Set a property to the `index`-th entry of its enumerated values.
    ///
    /// Returns `Ok(None)` without touching the transport when the property
    /// is not ENUM-formed or the index is out of range.
    pub fn set_enum_index(&mut self, code: u16, index: usize) -> Result<Option<u32>> {
        if !self.properties.contains_key(&code) {
            return Err(Error::UnknownProperty(code));
        }
        let Some(value) = self
            .property_enum(code)
            .and_then(|table| table.entries.into_iter().nth(index))
            .map(|entry| entry.value)
        else {
            return Ok(None);
        };
        self.set_value(code, &value).map(Some)
    }

    /// Trigger the shutter. Fails with [`Error::NotSupported`] without
    /// touching the transport when the device does not list
    /// InitiateCapture.
    pub fn initiate_capture(&mut self) -> Result<u32> {
        if !self.is_operation_supported(opcode::INITIATE_CAPTURE) {
            return Err(Error::NotSupported(opcode::INITIATE_CAPTURE));
        }

        // Default storage id, default object format.
        let reply = self
            .transport
            .send_command(opcode::INITIATE_CAPTURE, &[0, 0], None, 0)?;
        debug!(
            "InitiateCapture -> {}",
            response_code_string(reply.result_code)
        );
        Ok(reply.result_code)
    }

    /// The standard BatteryLevel property normalized to a percentage, or
    /// `None` when the device does not expose a readable battery level.
    ///
    /// The property's RANGE (or the min/max over its ENUM values) maps the
    /// raw u8 onto 0–100; a degenerate range reads as full.
    pub fn battery_percent(&mut self) -> Option<f32> {
        const BATTERY_LEVEL: u16 = 0x5001;

        let current = self.current_value(BATTERY_LEVEL).ok()?;
        // BatteryLevel is by definition a UINT8.
        let level = current.as_u8().ok()?;

        let info = self.properties.get(&BATTERY_LEVEL)?;
        let (min, max) = match info.form {
            FormCode::Range => {
                let min = info.range.first()?.as_u8().ok()?;
                let max = info.range.get(1)?.as_u8().ok()?;
                (min, max)
            }
            FormCode::Enum => {
                let mut vals = info.range.iter().filter_map(|v| v.as_u8().ok());
                let first = vals.next()?;
                vals.fold((first, first), |(min, max), v| (min.min(v), max.max(v)))
            }
            // No form on a battery level: treat the value as a percentage.
            FormCode::None => (0, 100),
        };

        if max <= min {
            return Some(100.0);
        }
        let level = level.clamp(min, max);
        Some(f32::from(level - min) * 100.0 / f32::from(max - min))
    }
}
