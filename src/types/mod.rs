//! Core type definitions for ptp-oxide
//!
//! This module provides the property value model (`PropertyValue` and its
//! type/form codes) and the error types used throughout the library.

pub mod errors;
pub mod values;

pub use errors::{Error, Result};
pub use values::{FormCode, PropertyValue, TypeCode};
