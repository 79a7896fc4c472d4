use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// One reporting period (a month or a day) for a single station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Period label, e.g. "Tháng 3" or "Ngày 14"
    pub period: String,

    /// UV index
    pub uv: f64,

    /// PM2.5 concentration in μg/m³
    pub pm25: f64,

    /// PM1.0 concentration in μg/m³
    pub pm1_0: f64,

    /// Date the period's reading was recorded
    pub date: NaiveDate,
}

impl ReportRow {
    /// Whether the row's date lies within `from..=to`
    pub fn in_range(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.date >= from && self.date <= to
    }
}

/// Format a date the way the dashboard shows it: `d/m/yyyy`
pub fn format_local_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
