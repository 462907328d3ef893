//! PTP code name tables with per-vendor dispatch
//!
//! Opcode, event and property names in the standard bands come from dense
//! tables indexed by the low bits of the code. Vendor-band codes dispatch
//! on the vendor extension id to a sorted per-vendor table searched by key;
//! anything unmapped falls back to a hex stub so listings never lose
//! information.

mod canon;
mod nikon;
mod standard;

/// Nikon's PTP vendor extension id.
pub const VENDOR_NIKON: u32 = 0x0000_000a;
/// Canon's PTP vendor extension id.
pub const VENDOR_CANON: u32 = 0x0000_000b;
/// The id some Nikon bodies misreport; it belongs to Microsoft.
pub const VENDOR_MISREPORTED: u32 = 0x0000_0006;

/// Resolve the vendor id to use for table lookups.
///
/// Some Nikon cameras forgot to set their vendor extension id and report
/// themselves as "Microsoft"; treat those as Nikon. The raw id stays
/// available through [`crate::PtpCamera::vendor_extension_id`] for
/// debugging.
pub fn effective_vendor_id(raw_id: u32, manufacturer: &str) -> u32 {
    if raw_id == VENDOR_MISREPORTED && manufacturer == "Nikon" {
        VENDOR_NIKON
    } else {
        raw_id
    }
}

fn lookup(table: &[(u16, &'static str)], code: u16) -> Option<&'static str> {
    table
        .binary_search_by_key(&code, |&(key, _)| key)
        .ok()
        .map(|idx| table[idx].1)
}

fn lookup_pair<V: Ord + Copy>(
    table: &[((u16, V), &'static str)],
    key: (u16, V),
) -> Option<&'static str> {
    table
        .binary_search_by_key(&key, |&(key, _)| key)
        .ok()
        .map(|idx| table[idx].1)
}

/// Name an operation code (standard band 0x1xxx, vendor band 0x9xxx).
pub fn opcode_name(code: u16, vendor_id: u32) -> String {
    if code & 0xf000 == 0x1000 {
        return match standard::OPCODES.get((code & 0x0fff) as usize) {
            Some(name) => (*name).to_string(),
            None => format!("Reserved-{code:x}"),
        };
    }

    if code & 0xf000 == 0x9000 {
        let table = match vendor_id {
            VENDOR_NIKON => nikon::OPCODES,
            VENDOR_CANON => canon::OPCODES,
            _ => &[],
        };
        return match lookup(table, code) {
            Some(name) => name.to_string(),
            None => format!("Vendor[{vendor_id:x}]-{code:x}"),
        };
    }

    format!("Invalid-{code:x}")
}

/// Name an event code (standard band 0x4xxx, vendor band 0xCxxx).
pub fn event_name(code: u16, vendor_id: u32) -> String {
    if code & 0xf000 == 0x4000 {
        return match standard::EVENTS.get((code & 0x0fff) as usize) {
            Some(name) => (*name).to_string(),
            None => format!("Reserved-{code:x}"),
        };
    }

    if code & 0xf000 == 0xc000 {
        let table = match vendor_id {
            VENDOR_NIKON => nikon::EVENTS,
            VENDOR_CANON => canon::EVENTS,
            _ => &[],
        };
        return match lookup(table, code) {
            Some(name) => name.to_string(),
            None => format!("Vendor[{vendor_id:x}]-{code:x}"),
        };
    }

    format!("Invalid-{code:x}")
}

/// Name a device property code (standard band 0x5xxx, vendor band 0xDxxx).
pub fn property_name(code: u16, vendor_id: u32) -> String {
    if code & 0xf000 == 0x5000 {
        return match standard::PROPERTIES.get((code & 0x0fff) as usize) {
            Some(name) => (*name).to_string(),
            None => format!("Reserved-{code:x}"),
        };
    }

    if code & 0xf000 == 0xd000 {
        let table = match vendor_id {
            VENDOR_NIKON => nikon::PROPERTIES,
            VENDOR_CANON => canon::PROPERTIES,
            _ => &[],
        };
        return match lookup(table, code) {
            Some(name) => name.to_string(),
            None => format!("Vendor[{vendor_id:x}]-{code:x}"),
        };
    }

    format!("Invalid-{code:x}")
}

/// Label a u8 property value. No u8 property has tabled labels; values
/// render as hex.
pub fn property_u8_label(_code: u16, value: u8, _vendor_id: u32) -> String {
    format!("0x{value:x}")
}

/// Label a u16 property value.
///
/// F-Number and ExposureIndex are computed, not tabled. Values with the
/// vendor bit clear resolve through the standard table; the rest dispatch
/// on the vendor id.
pub fn property_u16_label(code: u16, value: u16, vendor_id: u32) -> String {
    if code == 0x5007 {
        // F-Number is the aperture in hundredths.
        return format!("f/{}", f64::from(value) / 100.0);
    }

    if code == 0x500f {
        // ExposureIndex
        if value == 0xffff {
            return "Auto ISO".to_string();
        }
        return format!("ISO {value}");
    }

    if value & 0x8000 == 0 {
        return match lookup_pair(standard::PROP_U16_LABELS, (code, value)) {
            Some(label) => label.to_string(),
            None => format!("Reserved-{value:x}"),
        };
    }

    let table = match vendor_id {
        VENDOR_NIKON => nikon::PROP_U16_LABELS,
        _ => &[],
    };
    match lookup_pair(table, (code, value)) {
        Some(label) => label.to_string(),
        None => format!("Vendor[{vendor_id:x}]-{value:x}"),
    }
}

/// Label a u32 property value.
///
/// ExposureTime is computed; PTP counts it in units of 0.1 ms, with the
/// all-ones value meaning a bulb exposure.
pub fn property_u32_label(code: u16, value: u32, vendor_id: u32) -> String {
    if code == 0x500d {
        if value == 0xffff_ffff {
            return "Bulb".to_string();
        }
        return format!("{} ms", f64::from(value) / 10.0);
    }

    if value & 0x8000 == 0 {
        return match lookup_pair(standard::PROP_U32_LABELS, (code, value)) {
            Some(label) => label.to_string(),
            None => format!("Reserved-{value:x}"),
        };
    }

    let table = match vendor_id {
        VENDOR_NIKON => nikon::PROP_U32_LABELS,
        _ => &[],
    };
    match lookup_pair(table, (code, value)) {
        Some(label) => label.to_string(),
        None => format!("Vendor[{vendor_id:x}]-{value:x}"),
    }
}

/// Name a PTP object format code, as used in the capture and image format
/// listings.
pub fn object_format_name(code: u16) -> String {
    match code {
        0x3000 => "Undefined non-image object".to_string(),
        0x3001 => "Association (e.g. directory)".to_string(),
        0x3002 => "Script (device-model specific)".to_string(),
        0x3006 => "Digital Print Order Format (text)".to_string(),
        0x3800 => "Unknown image object".to_string(),
        0x3801 => "EXIF/JPEG".to_string(),
        0x3808 => "JFIF".to_string(),
        0x380d => "TIFF".to_string(),
        _ => format!("0x{code:x}"),
    }
}
