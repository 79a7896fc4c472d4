use std::{fmt, io};

/// Crate-wide `Result` type using [`AqError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations.
pub type Result<T> = std::result::Result<T, AqError>;

/// Top-level error type for aqreport operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum AqError {
    /// Configuration errors.
    Config(ConfigError),

    /// Spreadsheet export errors.
    Export(ExportError),

    /// Data provider errors.
    Provider(ProviderError),

    /// Application state storage errors.
    Storage(StorageError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/// Export-specific errors.
#[derive(Debug)]
pub enum ExportError {
    /// Nothing to export.
    EmptyRecordSet,

    /// Workbook could not be built or saved.
    Workbook(String),

    /// Output path is unusable.
    InvalidPath(String),
}

/// Data provider errors.
#[derive(Debug)]
pub enum ProviderError {
    /// No station with this id.
    UnknownStation(String),

    /// `from` is after `to`.
    InvalidRange { from: String, to: String },
}

/// State store errors.
#[derive(Debug)]
pub enum StorageError {
    /// Value could not be (de)serialized.
    Serialization(String),

    /// Backend read or write failed.
    Backend(String),
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for AqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AqError::Config(e) => write!(f, "Configuration error: {e}"),
            AqError::Export(e) => write!(f, "Export error: {e}"),
            AqError::Provider(e) => write!(f, "Data error: {e}"),
            AqError::Storage(e) => write!(f, "State error: {e}"),
            AqError::Io(e) => write!(f, "I/O error: {e}"),
            AqError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::EmptyRecordSet => write!(f, "No records to export"),
            ExportError::Workbook(msg) => write!(f, "Failed to write workbook: {msg}"),
            ExportError::InvalidPath(path) => write!(f, "Invalid output path: {path}"),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::UnknownStation(id) => write!(f, "Unknown station: {id}"),
            ProviderError::InvalidRange { from, to } => {
                write!(f, "Start date {from} is after end date {to}")
            }
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Serialization(msg) => write!(f, "Serialization failed: {msg}"),
            StorageError::Backend(msg) => write!(f, "Storage backend failed: {msg}"),
        }
    }
}

impl std::error::Error for AqError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AqError::Io(e) => Some(e),
            _ => None,
        }
    }
}
impl std::error::Error for ConfigError {}
impl std::error::Error for ExportError {}
impl std::error::Error for ProviderError {}
impl std::error::Error for StorageError {}

/* ========================= Conversions to AqError ========================= */

impl From<io::Error> for AqError {
    fn from(err: io::Error) -> Self {
        AqError::Io(err)
    }
}

impl From<ConfigError> for AqError {
    fn from(err: ConfigError) -> Self {
        AqError::Config(err)
    }
}

impl From<ExportError> for AqError {
    fn from(err: ExportError) -> Self {
        AqError::Export(err)
    }
}

impl From<ProviderError> for AqError {
    fn from(err: ProviderError) -> Self {
        AqError::Provider(err)
    }
}

impl From<StorageError> for AqError {
    fn from(err: StorageError) -> Self {
        AqError::Storage(err)
    }
}

impl From<rust_xlsxwriter::XlsxError> for AqError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AqError::Export(ExportError::Workbook(err.to_string()))
    }
}

impl From<serde_json::Error> for AqError {
    fn from(err: serde_json::Error) -> Self {
        AqError::Storage(StorageError::Serialization(err.to_string()))
    }
}

impl From<toml::de::Error> for AqError {
    fn from(err: toml::de::Error) -> Self {
        AqError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<toml::ser::Error> for AqError {
    fn from(err: toml::ser::Error) -> Self {
        AqError::Config(ConfigError::InvalidFormat(err.to_string()))
    }
}

impl From<reedline::ReedlineError> for AqError {
    fn from(err: reedline::ReedlineError) -> Self {
        AqError::Generic(format!("Line editor error: {err}"))
    }
}

impl From<String> for AqError {
    fn from(msg: String) -> Self {
        AqError::Generic(msg)
    }
}

impl From<&str> for AqError {
    fn from(msg: &str) -> Self {
        AqError::Generic(msg.to_owned())
    }
}
