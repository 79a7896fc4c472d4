//! Paginated data table
//!
//! This module turns a typed record set into pages of display text:
//! - `Column<T>`: typed column descriptors with optional custom renderers
//! - `Pagination`: the clamped 1-based page counter
//! - `DataTable<T>`: owns records, columns and pagination; renders a `PageView`
//!
//! The table knows nothing about terminals or spreadsheets. Drawing a
//! `PageView` is the job of [`crate::formatter`].
//!
//! # Example
//!
//! ```
//! use aqreport::table::{Column, DataTable, TableOptions};
//!
//! let columns = vec![Column::new("n", "N", |n: &u32| Some(n.to_string()))];
//! let mut table = DataTable::new(columns, (1..=12).collect(), TableOptions::default());
//!
//! assert_eq!(table.total_pages(), 2);
//! table.next_page();
//! assert_eq!(table.visible_records(), &[11, 12]);
//! ```

pub mod column;
pub mod pagination;
pub mod view;

pub use column::{Align, Column, EMPTY_CELL};
pub use pagination::{DEFAULT_PAGE_WINDOW, PAGE_SIZE_OPTIONS, Pagination};
pub use view::{DataTable, HeaderCell, PageBody, PageView, TableOptions};
