//! Spreadsheet export for report data
//!
//! The export always covers the whole filtered record set, not just the page
//! currently on screen. It runs in two steps:
//!
//! 1. **ExportSheet**: lays out headers, rows and column widths in memory
//! 2. **ExportAdapter**: writes that layout as an `.xlsx` workbook with
//!    `rust_xlsxwriter` under a dated filename

pub mod sheet;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use rust_xlsxwriter::{Format, Workbook};
use tracing::{debug, info};

use crate::error::{ExportError, Result};
use crate::report::{Indicator, ReportRow, ViewMode};

pub use sheet::{COLUMN_WIDTHS, CellValue, ExportSheet, INDEX_HEADER};

/// Station label used when the station name is unknown
const FALLBACK_STATION: &str = "tram";

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Written workbook
    pub path: PathBuf,

    /// Data rows, excluding the header
    pub rows: usize,

    /// Columns per row
    pub columns: usize,
}

/// Build the workbook filename for a station and date
///
/// The date is written `d-m-yyyy`, i.e. the dashboard's `d/m/yyyy` with the
/// slashes replaced.
pub fn export_filename(station_name: Option<&str>, date: NaiveDate) -> String {
    let station = station_name
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_STATION);
    let date = crate::report::format_local_date(date).replace('/', "-");
    format!("bao-cao-chat-luong-khong-khi-{station}-{date}.xlsx")
}

/// Writes report exports into a fixed output directory
#[derive(Debug, Clone)]
pub struct ExportAdapter {
    output_dir: PathBuf,
}

impl ExportAdapter {
    /// Create an adapter writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export a report, naming the file after the station and today's date
    ///
    /// # Arguments
    /// * `records` - Every filtered record
    /// * `view` - Monthly or daily labelling
    /// * `indicator` - Which pollutant columns to include
    /// * `station_name` - Used in the filename
    ///
    /// # Returns
    /// * `Result<ExportSummary>` - Where the file went and what it holds
    pub fn export(
        &self,
        records: &[ReportRow],
        view: ViewMode,
        indicator: Indicator,
        station_name: Option<&str>,
    ) -> Result<ExportSummary> {
        let today = Local::now().date_naive();
        self.export_dated(records, view, indicator, station_name, today)
    }

    /// Same as [`ExportAdapter::export`] with an explicit filename date
    pub fn export_dated(
        &self,
        records: &[ReportRow],
        view: ViewMode,
        indicator: Indicator,
        station_name: Option<&str>,
        date: NaiveDate,
    ) -> Result<ExportSummary> {
        let sheet = ExportSheet::build(records, view, indicator)?;
        self.validate_output_dir()?;

        let path = self.output_dir.join(export_filename(station_name, date));
        debug!("Exporting {} rows to {}", sheet.rows.len(), path.display());

        write_workbook(&sheet, &path)?;

        info!("Exported {} rows to {}", sheet.rows.len(), path.display());
        Ok(ExportSummary {
            path,
            rows: sheet.rows.len(),
            columns: sheet.column_count(),
        })
    }

    fn validate_output_dir(&self) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(ExportError::InvalidPath(format!(
                "Directory does not exist: {}",
                self.output_dir.display()
            ))
            .into());
        }
        Ok(())
    }
}

/// Write a laid-out sheet to `path` as a single-sheet workbook
pub fn write_workbook(sheet: &ExportSheet, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&sheet.name)?;

    for (col, header) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, column_index(col)?, header, &header_format)?;
    }

    for (i, row) in sheet.rows.iter().enumerate() {
        let row_num = row_index(i + 1)?;
        for (col, cell) in row.iter().enumerate() {
            let col_num = column_index(col)?;
            match cell {
                CellValue::Number(n) => worksheet.write_number(row_num, col_num, *n)?,
                CellValue::Text(s) => worksheet.write_string(row_num, col_num, s)?,
            };
        }
    }

    for (col, width) in sheet.column_widths.iter().enumerate() {
        worksheet.set_column_width(column_index(col)?, *width)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn row_index(i: usize) -> Result<u32> {
    u32::try_from(i)
        .map_err(|_| ExportError::Workbook(format!("Row {i} exceeds worksheet limits")).into())
}

fn column_index(i: usize) -> Result<u16> {
    u16::try_from(i)
        .map_err(|_| ExportError::Workbook(format!("Column {i} exceeds worksheet limits")).into())
}
