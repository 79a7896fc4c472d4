//! Air-quality report model
//!
//! This module defines what a report is, independent of how it is shown:
//! - `ReportRow`: one month or day of readings for a station
//! - `ViewMode`: monthly vs daily reports (changes the period column label)
//! - `Indicator`: which pollutant columns a report includes
//! - `Pollutant` and `Severity`: per-indicator labels and colour thresholds
//! - `columns`: the `Column<ReportRow>` set used by the table
//! - `stats`: averages and maxima over a report

pub mod columns;
pub mod row;
pub mod stats;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use columns::report_columns;
pub use row::{ReportRow, format_local_date};
pub use stats::ReportSummary;

/// Label of the trailing "last updated" export column
pub const LAST_UPDATED_HEADER: &str = "NGÀY CẬP NHẬT";

/// Granularity of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Twelve monthly aggregates for one year
    Monthly,
    /// One row per day of the sample month
    Daily,
}

impl ViewMode {
    /// Header of the period column
    pub fn period_label(&self) -> &'static str {
        match self {
            ViewMode::Monthly => "THÁNG",
            ViewMode::Daily => "NGÀY",
        }
    }

    /// Worksheet name used on export
    pub fn sheet_name(&self) -> &'static str {
        match self {
            ViewMode::Monthly => "Báo cáo theo tháng",
            ViewMode::Daily => "Báo cáo theo ngày",
        }
    }
}

/// Indicator filter selected by the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    All,
    Uv,
    Pm25,
    Pm10,
}

impl Indicator {
    /// Whether a pollutant's column is part of this selection
    pub fn includes(&self, pollutant: Pollutant) -> bool {
        match self {
            Indicator::All => true,
            Indicator::Uv => pollutant == Pollutant::Uv,
            Indicator::Pm25 => pollutant == Pollutant::Pm25,
            Indicator::Pm10 => pollutant == Pollutant::Pm1_0,
        }
    }

    /// Selected pollutants, in display order
    pub fn pollutants(&self) -> Vec<Pollutant> {
        Pollutant::ALL
            .into_iter()
            .filter(|p| self.includes(*p))
            .collect()
    }
}

/// A measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    Uv,
    Pm1_0,
    Pm25,
}

impl Pollutant {
    /// Display order shared by the table and the export
    pub const ALL: [Pollutant; 3] = [Pollutant::Uv, Pollutant::Pm1_0, Pollutant::Pm25];

    pub fn key(&self) -> &'static str {
        match self {
            Pollutant::Uv => "uv",
            Pollutant::Pm1_0 => "pm1_0",
            Pollutant::Pm25 => "pm25",
        }
    }

    /// Column title in the terminal table
    pub fn table_title(&self) -> &'static str {
        match self {
            Pollutant::Uv => "UV Index",
            Pollutant::Pm1_0 => "PM1.0 (μg/m³)",
            Pollutant::Pm25 => "PM2.5 (μg/m³)",
        }
    }

    /// Column header in the exported workbook
    pub fn export_header(&self) -> &'static str {
        match self {
            Pollutant::Uv => "UV INDEX",
            Pollutant::Pm1_0 => "PM1.0 (μg/m³)",
            Pollutant::Pm25 => "PM2.5 (μg/m³)",
        }
    }

    pub fn value(&self, row: &ReportRow) -> f64 {
        match self {
            Pollutant::Uv => row.uv,
            Pollutant::Pm1_0 => row.pm1_0,
            Pollutant::Pm25 => row.pm25,
        }
    }

    /// Lower bounds of the moderate, high and very-high bands
    fn thresholds(&self) -> [f64; 3] {
        match self {
            Pollutant::Uv => [3.0, 6.0, 8.0],
            Pollutant::Pm1_0 => [30.0, 40.0, 50.0],
            Pollutant::Pm25 => [15.0, 25.0, 35.0],
        }
    }

    /// Classify a reading
    pub fn severity(&self, value: f64) -> Severity {
        let [moderate, high, very_high] = self.thresholds();
        if value >= very_high {
            Severity::VeryHigh
        } else if value >= high {
            Severity::High
        } else if value >= moderate {
            Severity::Moderate
        } else {
            Severity::Good
        }
    }
}

/// Colour band of a reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Good,
    Moderate,
    High,
    VeryHigh,
}
