//! Air-quality report library
//!
//! Core of `aqreport`: a generic paginated table, the report model for
//! station readings, an async data provider and an `.xlsx` exporter. The
//! binary wraps these in a CLI, but every piece can be used on its own.
//!
//! # Modules
//!
//! - `table`: generic paginated table over typed records
//! - `report`: report rows, view modes, indicator filter, statistics
//! - `provider`: async data source and the built-in mock provider
//! - `export`: spreadsheet export of a full record set
//! - `state`: typed application state over pluggable key-value stores
//! - `formatter`: terminal rendering of table pages
//! - `config`: configuration management
//! - `error`: error types and handling
//! - `cli`, `browse`: command-line interface and interactive pager
//!
//! # Example
//!
//! ```no_run
//! use aqreport::provider::{MockProvider, ReportQuery, fetch_report};
//! use aqreport::report::{Indicator, ViewMode};
//! use aqreport::export::ExportAdapter;
//! use chrono::NaiveDate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = MockProvider::default();
//!     let query = ReportQuery {
//!         station_id: "A001".to_string(),
//!         view: ViewMode::Monthly,
//!         from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//!         to: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
//!     };
//!     let rows = fetch_report(&provider, &query).await?;
//!
//!     let summary = ExportAdapter::new(".").export(&rows, query.view, Indicator::All, None)?;
//!     println!("Wrote {}", summary.path.display());
//!     Ok(())
//! }
//! ```

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod formatter;
pub mod provider;
pub mod report;
pub mod state;
pub mod table;

// Re-export commonly used types
pub use config::Config;
pub use error::{AqError, Result};
pub use export::{ExportAdapter, ExportSummary};
pub use provider::{MockProvider, ReportProvider};
pub use report::{Indicator, ReportRow, ViewMode};
pub use state::AppState;
pub use table::{Column, DataTable, TableOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library version string
pub fn version() -> &'static str {
    VERSION
}
