//! Terminal output for aqreport
//!
//! This module draws what the rest of the crate computes:
//! - `TableFormatter`: renders a [`crate::table::PageView`] with tabled
//! - `pagination_footer`: range summary and page buttons under a table
//! - `Colorizer`: status messages, honoring `--no-color`

pub mod colorizer;
pub mod footer;
pub mod table;

pub use colorizer::Colorizer;
pub use footer::pagination_footer;
pub use table::TableFormatter;
