//! Error handling for aqreport.
//!
//! All fallible operations return [`Result`], whose error side is the
//! top-level [`AqError`]. Each subsystem has its own kind enum that converts
//! into `AqError` with `?`.
//!
//! # Example
//!
//! ```rust
//! use aqreport::error::{AqError, ExportError, Result};
//!
//! fn export_nothing() -> Result<()> {
//!     Err(ExportError::EmptyRecordSet.into())
//! }
//!
//! assert!(matches!(export_nothing(), Err(AqError::Export(_))));
//! ```

pub mod kinds;

// Re-export commonly used types
pub use kinds::{AqError, ConfigError, ExportError, ProviderError, Result, StorageError};
