//! Error types for ptp-oxide

use crate::transport::response_code_string;
use crate::types::TypeCode;
use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The transport layer failed before a PTP response was produced.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A codec read ran past the end of the buffer. Engine entry points
    /// surface this as [`Error::Malformed`].
    #[error("data truncated while reading {0}")]
    Truncated(&'static str),

    #[error("malformed reply: {0}")]
    Malformed(String),

    #[error("property 0x{0:04x} is not supported by the device")]
    UnknownProperty(u16),

    #[error("type mismatch: expected {expected:?}, got {actual:?}")]
    TypeMismatch {
        expected: TypeCode,
        actual: TypeCode,
    },

    #[error("property 0x{0:04x} is read-only")]
    NotSettable(u16),

    #[error("operation 0x{0:04x} is not supported by the device")]
    NotSupported(u16),

    /// The device answered with a PTP response code other than OK. The raw
    /// code is preserved so callers can discriminate (a `0x2003` prompts a
    /// session re-open at a layer above).
    #[error("device returned {}", response_code_string(*.0))]
    Device(u32),
}

impl Error {
    /// Promote a codec truncation into the `Malformed` error the engine
    /// reports for replies shorter than their declared structure.
    pub(crate) fn into_malformed(self, reply: &str) -> Error {
        match self {
            Error::Truncated(field) => Error::Malformed(format!("{reply} ends short of {field}")),
            other => other,
        }
    }
}
