use super::ReportRow;

/// Averages and maxima of a report's readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub count: usize,
    pub uv_avg: f64,
    pub pm25_avg: f64,
    pub pm1_0_avg: f64,
    pub uv_max: f64,
    pub pm25_max: f64,
    pub pm1_0_max: f64,
}

impl ReportSummary {
    /// Summarize a record set
    ///
    /// # Returns
    /// * `Option<ReportSummary>` - `None` for an empty set
    pub fn from_rows(rows: &[ReportRow]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let n = rows.len() as f64;
        let sum = |f: fn(&ReportRow) -> f64| rows.iter().map(f).sum::<f64>();
        let max = |f: fn(&ReportRow) -> f64| rows.iter().map(f).fold(f64::MIN, f64::max);

        Some(Self {
            count: rows.len(),
            uv_avg: sum(|r: &ReportRow| r.uv) / n,
            pm25_avg: sum(|r: &ReportRow| r.pm25) / n,
            pm1_0_avg: sum(|r: &ReportRow| r.pm1_0) / n,
            uv_max: max(|r: &ReportRow| r.uv),
            pm25_max: max(|r: &ReportRow| r.pm25),
            pm1_0_max: max(|r: &ReportRow| r.pm1_0),
        })
    }

    /// One-line text summary with one decimal place
    pub fn describe(&self) -> String {
        format!(
            "{} bản ghi | UV TB {:.1} (max {:.1}) | PM2.5 TB {:.1} (max {:.1}) | PM1.0 TB {:.1} (max {:.1})",
            self.count,
            self.uv_avg,
            self.uv_max,
            self.pm25_avg,
            self.pm25_max,
            self.pm1_0_avg,
            self.pm1_0_max
        )
    }
}
