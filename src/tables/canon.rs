//! Canon vendor-extension code names
//!
//! Tables are sorted by key for binary search. Gaps in the code space are
//! real; Canon skipped them.

/// Canon vendor operation codes (0x9xxx band, extension id 0x0000000B).
pub(super) static OPCODES: &[(u16, &str)] = &[
    (0x9001, "CANON GetPartialObjectInfo"),
    (0x9002, "CANON SetObjectArchive"),
    (0x9003, "CANON KeepDeviceOn"),
    (0x9004, "CANON LockDeviceUI"),
    (0x9005, "CANON UnlockDeviceUI"),
    (0x9006, "CANON GetObjectHandleByName"),
    (0x9008, "CANON InitiateReleaseControl"),
    (0x9009, "CANON TerminateReleaseControl"),
    (0x900a, "CANON TerminatePlaybackMode"),
    (0x900b, "CANON ViewfinderOn"),
    (0x900c, "CANON ViewfinderOff"),
    (0x900d, "CANON DoAeAfAwb"),
    (0x900e, "CANON GetCustomizeSpec"),
    (0x900f, "CANON GetCustomizeItemInfo"),
    (0x9010, "CANON GetCustomizeData"),
    (0x9011, "CANON SetCustomizeData"),
    (0x9012, "CANON GetCaptureStatus"),
    (0x9013, "CANON CheckEvent"),
    (0x9014, "CANON FocusLock"),
    (0x9015, "CANON FocusUnlock"),
    (0x9016, "CANON GetLocalReleaseParam"),
    (0x9017, "CANON SetLocalReleaseParam"),
    (0x9018, "CANON AskAboutPcEvf"),
    (0x9019, "CANON SendPartialObject"),
    (0x901a, "CANON InitiateCaptureInMemory"),
    (0x901b, "CANON GetPartialObjectEx"),
    (0x901c, "CANON SetObjectTime"),
    (0x901d, "CANON GetViewfinderImage"),
    (0x901e, "CANON GetObjectAttributes"),
    (0x901f, "CANON ChangeUSBProtocol"),
    (0x9020, "CANON GetChanges"),
    (0x9021, "CANON GetObjectInfoEx"),
    (0x9022, "CANON InitiateDirectTransfer"),
    (0x9023, "CANON TerminateDirectTransfer"),
    (0x9024, "CANON SendObjectInfoByPath"),
    (0x9025, "CANON SendObjectByPath"),
    (0x9026, "CANON InitiateDirectTransferEx"),
    (0x9027, "CANON GetAncillaryObjectHandles"),
    (0x9028, "CANON GetTreeInfo"),
    (0x9029, "CANON GetTreeSize"),
    (0x902a, "CANON NotifyProgress"),
    (0x902b, "CANON NotifyCancelAccepted"),
    (0x902d, "CANON GetDirectory"),
    (0x9030, "CANON SetPairingInfo"),
    (0x9031, "CANON GetPairingInfo"),
    (0x9032, "CANON DeletePairingInfo"),
    (0x9033, "CANON GetMACAddress"),
    (0x9034, "CANON SetDisplayMonitor"),
    (0x9035, "CANON PairingComplete"),
    (0x9036, "CANON GetWirelessMAXChannel"),
];

/// Canon vendor event codes (0xCxxx band).
pub(super) static EVENTS: &[(u16, &str)] = &[
    (0xc000, "CANON 0xc000"),
    (0xc001, "CANON 0xc001"),
    (0xc002, "CANON 0xc002"),
    (0xc003, "CANON 0xc003"),
    (0xc004, "CANON 0xc004"),
    (0xc005, "CANON ExtendedErrorcode"),
    (0xc006, "CANON 0xc006"),
    (0xc007, "CANON 0xc007"),
    (0xc008, "CANON ObjectInfoChanged"),
    (0xc009, "CANON RequestObjectTransfer"),
    (0xc00a, "CANON 0xc00a"),
    (0xc00b, "CANON 0xc00b"),
    (0xc00c, "CANON CameraModeChanged"),
    (0xc00d, "CANON 0xc00d"),
    (0xc00e, "CANON 0xc00e"),
    (0xc00f, "CANON 0xc00f"),
    (0xc010, "CANON 0xc010"),
    (0xc011, "CANON StartDirectTransfer"),
    (0xc012, "CANON 0xc012"),
    (0xc013, "CANON StopDirectTransfer"),
    (0xc019, "CANON 0xc019"),
    (0xc01a, "CANON 0xc01a"),
];

/// Canon vendor property codes (0xDxxx band); 0xD04A–0xD183 are still
/// unmapped.
pub(super) static PROPERTIES: &[(u16, &str)] = &[
    (0xd000, "Undefined"),
    (0xd001, "BeepMode"),
    (0xd002, "BatteryKind"),
    (0xd003, "BatteryStatus"),
    (0xd004, "UILockType"),
    (0xd005, "CameraMode"),
    (0xd006, "ImageQuality"),
    (0xd007, "FullViewFileFormat"),
    (0xd008, "ImageSize"),
    (0xd009, "SelfTime"),
    (0xd00a, "FlashMode"),
    (0xd00b, "Beep"),
    (0xd00c, "ShootingMode"),
    (0xd00d, "ImageMode"),
    (0xd00e, "DriveMode"),
    (0xd00f, "EZoom"),
    (0xd010, "MeteringMode"),
    (0xd011, "AFDistance"),
    (0xd012, "FocusingPoint"),
    (0xd013, "WhiteBalance"),
    (0xd014, "SlowShutterSetting"),
    (0xd015, "AFMode"),
    (0xd016, "ImageStabilization"),
    (0xd017, "Contrast"),
    (0xd018, "ColorGain"),
    (0xd019, "Sharpness"),
    (0xd01a, "Sensitivity"),
    (0xd01b, "ParameterSet"),
    (0xd01c, "ISOSpeed"),
    (0xd01d, "Aperture"),
    (0xd01e, "ShutterSpeed"),
    (0xd01f, "ExpCompensation"),
    (0xd020, "FlashCompensation"),
    (0xd021, "AEBExposureCompensation"),
    (0xd023, "AvOpen"),
    (0xd024, "AvMax"),
    (0xd025, "FocalLength"),
    (0xd026, "FocalLengthTele"),
    (0xd027, "FocalLengthWide"),
    (0xd028, "FocalLengthDenominator"),
    (0xd029, "CaptureTransferMode"),
    (0xd02a, "Zoom"),
    (0xd02b, "NamePrefix"),
    (0xd02c, "SizeQualityMode"),
    (0xd02d, "SupportedThumbSize"),
    (0xd02e, "SizeOfOutputDataFromCamera"),
    (0xd02f, "SizeOfInputDataToCamera"),
    (0xd030, "RemoteAPIVersion"),
    (0xd031, "FirmwareVersion"),
    (0xd032, "CameraModel"),
    (0xd033, "CameraOwner"),
    (0xd034, "UnixTime"),
    (0xd035, "CameraBodyID"),
    (0xd036, "CameraOutput"),
    (0xd037, "DispAv"),
    (0xd038, "AvOpenApex"),
    (0xd039, "DZoomMagnification"),
    (0xd03a, "MlSpotPos"),
    (0xd03b, "DispAvMax"),
    (0xd03c, "AvMaxApex"),
    (0xd03d, "EZoomStartPosition"),
    (0xd03e, "FocalLengthOfTele"),
    (0xd03f, "EZoomSizeOfTele"),
    (0xd040, "PhotoEffect"),
    (0xd041, "AssistLight"),
    (0xd042, "FlashQuantityCount"),
    (0xd043, "RotationAngle"),
    (0xd044, "RotationScene"),
    (0xd045, "EventEmulationMode"),
    (0xd046, "DPOFVersion"),
    (0xd047, "TypeOfSupportedSlideShow"),
    (0xd048, "AverageFilesizes"),
    (0xd049, "ModelID"),
];
