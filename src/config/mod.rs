//! Configuration management for aqreport
//!
//! Configuration is read from a TOML file and then overridden by
//! command-line arguments:
//!
//! Configuration precedence (highest to lowest):
//! 1. Command-line arguments
//! 2. Configuration file (`-c FILE` or `~/.aqreport/config.toml`)
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Upper bound for the simulated provider latency
const MAX_LATENCY_MS: u64 = 60_000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Table and pagination defaults
    #[serde(default)]
    pub table: TableConfig,

    /// Spreadsheet export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Data provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Terminal display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Persisted application state
    #[serde(default)]
    pub state: StateConfig,
}

/// Table-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Number of rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Prepend a running index column
    #[serde(default = "default_show_index")]
    pub show_index: bool,

    /// Title of the index column
    #[serde(default = "default_index_title")]
    pub index_title: String,

    /// Placeholder shown when there are no rows
    #[serde(default = "default_empty_text")]
    pub empty_text: String,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where workbooks are written
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Data provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Simulated response latency of the mock provider, in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

/// Display and output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Border style for terminal tables
    #[serde(default = "default_style")]
    pub style: TableStyleName,

    /// Enable colored output
    #[serde(default = "default_color_output")]
    pub color_output: bool,

    /// Wrap cells wider than this many characters
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
}

/// Table border styles selectable from the config file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TableStyleName {
    Modern,
    Ascii,
    Rounded,
    Markdown,
    Psql,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Application state persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// JSON file backing the persistent state store
    #[serde(default = "default_state_file")]
    pub file_path: PathBuf,
}

// Default value functions
fn default_page_size() -> usize {
    10
}

fn default_show_index() -> bool {
    true
}

fn default_index_title() -> String {
    "STT".to_string()
}

fn default_empty_text() -> String {
    "Không có dữ liệu".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_latency_ms() -> u64 {
    500
}

fn default_style() -> TableStyleName {
    TableStyleName::Modern
}

fn default_color_output() -> bool {
    true
}

fn default_max_column_width() -> usize {
    40
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

fn default_state_file() -> PathBuf {
    Config::home_dir().join("state.json")
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            show_index: default_show_index(),
            index_title: default_index_title(),
            empty_text: default_empty_text(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            color_output: default_color_output(),
            max_column_width: default_max_column_width(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            file_path: default_state_file(),
        }
    }
}

impl Config {
    /// Directory holding the config and state files
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".aqreport")
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - Parsed configuration, or `FileNotFound`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration, falling back to defaults when no file exists
    ///
    /// An explicit path that does not exist is an error. The default path
    /// is optional.
    ///
    /// # Arguments
    /// * `path` - Explicit config file, if given on the command line
    pub fn load_from_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    debug!("No config file at {}, using defaults", default_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Save configuration to a TOML file
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    ///
    /// # Returns
    /// * `Result<()>` - Ok if valid, error otherwise
    pub fn validate(&self) -> Result<()> {
        if self.table.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "table.page_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        if self.provider.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::InvalidValue {
                field: "provider.latency_ms".to_string(),
                value: self.provider.latency_ms.to_string(),
            }
            .into());
        }

        if self.display.max_column_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "display.max_column_width".to_string(),
                value: "0".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Get provider latency as Duration
    pub fn provider_latency(&self) -> Duration {
        Duration::from_millis(self.provider.latency_ms)
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.table.page_size, 10);
        assert_eq!(config.table.index_title, "STT");
        assert_eq!(config.display.style, TableStyleName::Modern);
        assert!(config.display.color_output);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [table]
            page_size = 20

            [display]
            style = "ascii"
            "#,
        )
        .unwrap();

        assert_eq!(config.table.page_size, 20);
        assert!(config.table.show_index);
        assert_eq!(config.display.style, TableStyleName::Ascii);
        assert_eq!(config.provider.latency_ms, 500);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[table\npage_size = ").unwrap_err();
        assert!(err.to_string().contains("Invalid config format"));
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.table.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_huge_latency() {
        let mut config = Config::default();
        config.provider.latency_ms = MAX_LATENCY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.table.page_size = 5;
        config.provider.latency_ms = 0;
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.table.page_size, 5);
        assert_eq!(loaded.provider.latency_ms, 0);
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load_from_file(Some(Path::new("/nonexistent/aq.toml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_provider_latency() {
        let config = Config::default();
        assert_eq!(config.provider_latency(), Duration::from_millis(500));
    }
}
