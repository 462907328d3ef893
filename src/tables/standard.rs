//! Standard PTP code names
//!
//! Codes in the standard bands are allocated contiguously, so these tables
//! are dense arrays indexed by the low bits of the code.

/// Standard operation codes 0x1000–0x101C
pub(super) static OPCODES: &[&str] = &[
    "Undefined",            // 0x1000
    "GetDeviceInfo",        // 0x1001
    "OpenSession",          // 0x1002
    "CloseSession",         // 0x1003
    "GetStorageIDs",        // 0x1004
    "GetStorageInfo",       // 0x1005
    "GetNumObjects",        // 0x1006
    "GetObjectHandles",     // 0x1007
    "GetObjectInfo",        // 0x1008
    "GetObject",            // 0x1009
    "GetThumb",             // 0x100A
    "DeleteObject",         // 0x100B
    "SendObjectInfo",       // 0x100C
    "SendObject",           // 0x100D
    "InitiateCapture",      // 0x100E
    "FormatStore",          // 0x100F
    "ResetDevice",          // 0x1010
    "SelfTest",             // 0x1011
    "SetObjectProtection",  // 0x1012
    "PowerDown",            // 0x1013
    "GetDevicePropDesc",    // 0x1014
    "GetDevicePropValue",   // 0x1015
    "SetDevicePropValue",   // 0x1016
    "ResetDevicePropValue", // 0x1017
    "TerminateOpenCapture", // 0x1018
    "MoveObject",           // 0x1019
    "CopyObject",           // 0x101A
    "GetPartialObject",     // 0x101B
    "InitiateOpenCapture",  // 0x101C
];

/// Standard event codes 0x4000–0x400E
pub(super) static EVENTS: &[&str] = &[
    "Undefined",             // 0x4000
    "CancelTransaction",     // 0x4001
    "ObjectAdded",           // 0x4002
    "ObjectRemoved",         // 0x4003
    "StoreAdded",            // 0x4004
    "StoreRemoved",          // 0x4005
    "DevicePropChanged",     // 0x4006
    "ObjectInfoChanged",     // 0x4007
    "DeviceInfoChanged",     // 0x4008
    "RequestObjectTransfer", // 0x4009
    "StoreFull",             // 0x400A
    "DeviceReset",           // 0x400B
    "StoreInfoChanged",      // 0x400C
    "CaptureComplete",       // 0x400D
    "UnreportedStatus",      // 0x400E
];

/// Standard device property codes 0x5000–0x501F
pub(super) static PROPERTIES: &[&str] = &[
    "Undefined",                // 0x5000
    "BatteryLevel",             // 0x5001
    "FunctionalMode",           // 0x5002
    "ImageSize",                // 0x5003
    "CompressionSetting",       // 0x5004
    "WhiteBalance",             // 0x5005
    "RGB Gain",                 // 0x5006
    "F-Number",                 // 0x5007
    "FocalLength",              // 0x5008
    "FocusDistance",            // 0x5009
    "FocusMode",                // 0x500A
    "ExposureMeteringMode",     // 0x500B
    "FlashMode",                // 0x500C
    "ExposureTime",             // 0x500D
    "ExposureProgramMode",      // 0x500E
    "ExposureIndex",            // 0x500F
    "ExposureBiasCompensation", // 0x5010
    "DateTime",                 // 0x5011
    "CaptureDelay",             // 0x5012
    "StillCaptureMode",         // 0x5013
    "Contrast",                 // 0x5014
    "Sharpness",                // 0x5015
    "DigitalZoom",              // 0x5016
    "EffectMode",               // 0x5017
    "BurstNumber",              // 0x5018
    "BurstInterval",            // 0x5019
    "TimelapseNumber",          // 0x501A
    "TimelapseInterval",        // 0x501B
    "FocusMeteringMode",        // 0x501C
    "UploadURL",                // 0x501D
    "Artist",                   // 0x501E
    "CopyrightInfo",            // 0x501F
];

/// Labels for standard u16 property values, keyed by (property, value).
/// Sorted for binary search.
pub(super) static PROP_U16_LABELS: &[((u16, u16), &str)] = &[
    // WhiteBalance
    ((0x5005, 0x0000), "Undefined"),
    ((0x5005, 0x0001), "Manual"),
    ((0x5005, 0x0002), "Automatic"),
    ((0x5005, 0x0003), "One-push Automatic"),
    ((0x5005, 0x0004), "Daylight"),
    ((0x5005, 0x0005), "Fluorescent"),
    ((0x5005, 0x0006), "Tungsten"),
    ((0x5005, 0x0007), "Flash"),
    // FocusMode
    ((0x500a, 0x0000), "Undefined"),
    ((0x500a, 0x0001), "Manual"),
    ((0x500a, 0x0002), "Automatic"),
    ((0x500a, 0x0003), "Automatic/Macro"),
    // FlashMode
    ((0x500c, 0x0000), "Undefined"),
    ((0x500c, 0x0001), "Auto flash"),
    ((0x500c, 0x0002), "Flash off"),
    ((0x500c, 0x0003), "Fill flash"),
    ((0x500c, 0x0004), "Red eye auto"),
    ((0x500c, 0x0005), "Red eye fill"),
    ((0x500c, 0x0006), "External Sync"),
    // ExposureProgramMode
    ((0x500e, 0x0000), "Undefined"),
    ((0x500e, 0x0001), "Manual"),
    ((0x500e, 0x0002), "Automatic"),
    ((0x500e, 0x0003), "Aperture Priority"),
    ((0x500e, 0x0004), "Shutter Priority"),
    ((0x500e, 0x0005), "Program Creative"),
    ((0x500e, 0x0006), "Program Action"),
    ((0x500e, 0x0007), "Portrait"),
    // ExposureIndex (0x500F) is formatted, not tabled
];

/// No standard u32-valued property has a tabled label; ExposureTime is
/// formatted instead.
pub(super) static PROP_U32_LABELS: &[((u16, u32), &str)] = &[];
