//! Nikon vendor-extension code names
//!
//! Tables are sorted by key for binary search. Codes observed but not yet
//! identified keep a hex placeholder name.

/// Nikon vendor operation codes (0x9xxx band, extension id 0x0000000A).
/// The 0x98xx block is the MTP overlap Nikon bodies expose.
pub(super) static OPCODES: &[(u16, &str)] = &[
    (0x90c0, "NIKON Capture"),
    (0x90c1, "NIKON AfDrive"),
    (0x90c2, "NIKON SetControlMode"),
    (0x90c3, "NIKON DelImageSDRAM"),
    (0x90c4, "NIKON 90c4"),
    (0x90c5, "NIKON CurveDownload"),
    (0x90c6, "NIKON CurveUpload"),
    (0x90c7, "NIKON CheckEvent"),
    (0x90c8, "NIKON DeviceReady"),
    (0x90c9, "NIKON SetPreWBData"),
    (0x90ca, "NIKON 90ca"),
    (0x90cb, "NIKON AfCaptureSDRAM"),
    (0x90cc, "NIKON AfCaptureSDRAM"),
    (0x90cd, "NIKON AfCaptureSDRAM"),
    (0x90ce, "NIKON AfCaptureSDRAM"),
    (0x90cf, "NIKON AfCaptureSDRAM"),
    (0x9200, "NIKON 9200"),
    (0x9201, "NIKON 9201"),
    (0x9202, "NIKON 9202"),
    (0x9203, "NIKON 9203"),
    (0x9204, "NIKON 9204"),
    (0x9205, "NIKON 9205"),
    (0x9206, "NIKON 9206"),
    (0x9801, "MTP GetObjectPropsSupported"),
    (0x9802, "MTP GetObjectPropDesc"),
    (0x9803, "MTP GetObjectPropValue"),
    (0x9804, "MTP SetObjectPropValue"),
    (0x9805, "MTP GetObjPropList"),
];

/// Nikon vendor event codes (0xCxxx band).
pub(super) static EVENTS: &[(u16, &str)] = &[
    (0xc000, "NIKON 0xc000"),
    (0xc101, "NIKON ObjectAddedInSDRAM"),
    (0xc102, "NIKON CaptureCompleteRecInSdram"),
    (0xc103, "NIKON 0xc103"),
    (0xc104, "NIKON 0xc104"),
    (0xc105, "NIKON 0xc105"),
];

/// Nikon vendor property codes (0xDxxx band). None published yet; lookups
/// fall through to the vendor hex stub.
pub(super) static PROPERTIES: &[(u16, &str)] = &[];

/// Labels for Nikon extensions of standard u16 properties (values with the
/// vendor bit 0x8000 set), keyed by (property, value).
pub(super) static PROP_U16_LABELS: &[((u16, u16), &str)] = &[
    // WhiteBalance
    ((0x5005, 0x8010), "NIKON Cloudy"),
    ((0x5005, 0x8011), "NIKON Shade"),
    ((0x5005, 0x8012), "NIKON Color Temperature"),
    ((0x5005, 0x8013), "NIKON Preset White Balance"),
    // FlashMode
    ((0x500c, 0x8010), "NIKON Fill-flash"),
    ((0x500c, 0x8011), "NIKON Slow sync"),
    ((0x500c, 0x8012), "NIKON Rear curtain + Slow sync"),
    ((0x500c, 0x8013), "NIKON Slow sync + Red eye"),
    // ExposureProgramMode
    ((0x500e, 0x8010), "NIKON Auto"),
    ((0x500e, 0x8011), "NIKON Portrait"),
    ((0x500e, 0x8012), "NIKON Landscape"),
    ((0x500e, 0x8013), "NIKON Close up"),
    ((0x500e, 0x8014), "NIKON Sports"),
    ((0x500e, 0x8015), "NIKON Night portrait"),
    ((0x500e, 0x8016), "NIKON Night Landscape"),
];

pub(super) static PROP_U32_LABELS: &[((u16, u32), &str)] = &[];
