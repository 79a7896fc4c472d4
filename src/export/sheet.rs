use crate::error::{ExportError, Result};
use crate::report::{Indicator, LAST_UPDATED_HEADER, ReportRow, ViewMode, format_local_date};

/// Column widths in characters, applied by position
pub const COLUMN_WIDTHS: [f64; 6] = [5.0, 15.0, 12.0, 15.0, 15.0, 15.0];

/// Header of the running index column
pub const INDEX_HEADER: &str = "STT";

/// A single worksheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

/// Worksheet contents, laid out before anything touches the disk
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    pub column_widths: Vec<f64>,
}

impl ExportSheet {
    /// Lay out the full record set for export
    ///
    /// Headers follow the view mode and indicator selection:
    /// `STT`, the period label, each selected pollutant, `NGÀY CẬP NHẬT`.
    ///
    /// # Arguments
    /// * `records` - Every filtered record, not only the visible page
    /// * `view` - Monthly or daily labelling
    /// * `indicator` - Which pollutant columns to include
    pub fn build(records: &[ReportRow], view: ViewMode, indicator: Indicator) -> Result<Self> {
        if records.is_empty() {
            return Err(ExportError::EmptyRecordSet.into());
        }

        let pollutants = indicator.pollutants();

        let mut headers = vec![INDEX_HEADER.to_string(), view.period_label().to_string()];
        headers.extend(pollutants.iter().map(|p| p.export_header().to_string()));
        headers.push(LAST_UPDATED_HEADER.to_string());

        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let mut row = Vec::with_capacity(headers.len());
                row.push(CellValue::Number((i + 1) as f64));
                row.push(CellValue::Text(record.period.clone()));
                row.extend(pollutants.iter().map(|p| CellValue::Number(p.value(record))));
                row.push(CellValue::Text(format_local_date(record.date)));
                row
            })
            .collect();

        let column_widths = COLUMN_WIDTHS.iter().copied().take(headers.len()).collect();

        Ok(Self {
            name: view.sheet_name().to_string(),
            headers,
            rows,
            column_widths,
        })
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rows(n: u32) -> Vec<ReportRow> {
        (1..=n)
            .map(|m| ReportRow {
                period: format!("Tháng {m}"),
                uv: 7.0 + f64::from(m) / 10.0,
                pm25: 20.0,
                pm1_0: 40.0,
                date: NaiveDate::from_ymd_opt(2024, m, 1).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_empty_is_rejected() {
        let err = ExportSheet::build(&[], ViewMode::Monthly, Indicator::All).unwrap_err();
        assert!(err.to_string().contains("No records to export"));
    }

    #[test]
    fn test_monthly_all_headers() {
        let sheet = ExportSheet::build(&rows(3), ViewMode::Monthly, Indicator::All).unwrap();
        assert_eq!(
            sheet.headers,
            vec![
                "STT",
                "THÁNG",
                "UV INDEX",
                "PM1.0 (μg/m³)",
                "PM2.5 (μg/m³)",
                "NGÀY CẬP NHẬT"
            ]
        );
        assert_eq!(sheet.name, "Báo cáo theo tháng");
        assert_eq!(sheet.column_widths, COLUMN_WIDTHS.to_vec());
    }

    #[test]
    fn test_daily_single_indicator() {
        let sheet = ExportSheet::build(&rows(2), ViewMode::Daily, Indicator::Uv).unwrap();
        assert_eq!(sheet.headers, vec!["STT", "NGÀY", "UV INDEX", "NGÀY CẬP NHẬT"]);
        assert_eq!(sheet.column_widths, vec![5.0, 15.0, 12.0, 15.0]);
        assert_eq!(sheet.name, "Báo cáo theo ngày");
    }

    #[test]
    fn test_one_row_per_record() {
        let records = rows(12);
        let sheet = ExportSheet::build(&records, ViewMode::Monthly, Indicator::Pm25).unwrap();
        assert_eq!(sheet.rows.len(), 12);
        assert!(sheet.rows.iter().all(|r| r.len() == sheet.column_count()));

        let last = &sheet.rows[11];
        assert_eq!(last[0], CellValue::Number(12.0));
        assert_eq!(last[1], CellValue::Text("Tháng 12".into()));
        assert_eq!(last[2], CellValue::Number(20.0));
        assert_eq!(last[3], CellValue::Text("1/12/2024".into()));
    }
}
