//! ptp-oxide - PTP (ISO 15740) still-image device control
//!
//! This crate implements the device abstraction layer of a remote DSLR
//! controller: the binary wire codec for PTP data containers, the device
//! property descriptor model, per-vendor code tables (standard, Nikon,
//! Canon), and a high-level engine that probes, reads and writes device
//! properties over an externally supplied [`Transport`].
//!
//! The transport is deliberately narrow (one synchronous PTP command
//! round-trip at a time) so the host glue, whether libusb, a platform
//! image-capture framework, or a test double, stays out of this crate
//! entirely.
//!
//! # Example
//! ```no_run
//! use ptp_oxide::{PtpCamera, Transport};
//!
//! fn dump<T: Transport>(transport: T) -> ptp_oxide::Result<()> {
//!     let mut camera = PtpCamera::new(transport);
//!     camera.initialize()?;
//!     println!("{} {}", camera.manufacturer(), camera.model());
//!     for name in camera.operations() {
//!         println!("  {name}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod camera;
pub mod codec;
pub mod device_info;
pub mod property;
pub mod tables;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use camera::{LabeledValue, PropertyEnum, PtpCamera};
pub use device_info::DeviceInfo;
pub use property::PropertyInfo;
pub use transport::{CommandReply, Transport};
pub use types::{Error, FormCode, PropertyValue, Result, TypeCode};
