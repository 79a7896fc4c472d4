use nu_ansi_term::Color;

use super::{Indicator, Pollutant, ReportRow, Severity, ViewMode, format_local_date};
use crate::table::{Align, Column};

/// Build the table columns for a report
///
/// The first column is labelled by the view mode, followed by each selected
/// pollutant and the update date.
///
/// # Arguments
/// * `view` - Monthly or daily labelling
/// * `indicator` - Which pollutant columns to include
/// * `colored` - Tint readings by severity band
pub fn report_columns(view: ViewMode, indicator: Indicator, colored: bool) -> Vec<Column<ReportRow>> {
    let mut columns = vec![
        Column::new("period", view.period_label(), |r: &ReportRow| {
            Some(r.period.clone())
        })
        .with_width(10)
        .with_align(Align::Left),
    ];

    for pollutant in indicator.pollutants() {
        columns.push(pollutant_column(pollutant, colored));
    }

    columns.push(
        Column::new("date", "Ngày cập nhật", |r: &ReportRow| {
            Some(r.date.to_string())
        })
        .with_width(12)
        .with_align(Align::Center)
        .with_render(|r: &ReportRow, _| format_local_date(r.date)),
    );

    columns
}

fn pollutant_column(pollutant: Pollutant, colored: bool) -> Column<ReportRow> {
    let width = match pollutant {
        Pollutant::Uv => 8,
        Pollutant::Pm1_0 | Pollutant::Pm25 => 13,
    };

    Column::new(pollutant.key(), pollutant.table_title(), move |r: &ReportRow| {
        Some(pollutant.value(r).to_string())
    })
    .with_width(width)
    .with_align(Align::Center)
    .with_render(move |r: &ReportRow, _| {
        let value = pollutant.value(r);
        let text = format!("{value:.1}");
        if colored {
            severity_color(pollutant.severity(value)).paint(text).to_string()
        } else {
            text
        }
    })
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Good => Color::Green,
        Severity::Moderate => Color::Yellow,
        Severity::High => Color::LightRed,
        Severity::VeryHigh => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> ReportRow {
        ReportRow {
            period: "Tháng 6".into(),
            uv: 9.8,
            pm25: 29.3,
            pm1_0: 48.9,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        }
    }

    fn titles(columns: &[Column<ReportRow>]) -> Vec<&str> {
        columns.iter().map(|c| c.title()).collect()
    }

    #[test]
    fn test_all_indicators_monthly() {
        let columns = report_columns(ViewMode::Monthly, Indicator::All, false);
        assert_eq!(
            titles(&columns),
            vec!["THÁNG", "UV Index", "PM1.0 (μg/m³)", "PM2.5 (μg/m³)", "Ngày cập nhật"]
        );
    }

    #[test]
    fn test_single_indicator_daily() {
        let columns = report_columns(ViewMode::Daily, Indicator::Pm25, false);
        assert_eq!(titles(&columns), vec!["NGÀY", "PM2.5 (μg/m³)", "Ngày cập nhật"]);
    }

    #[test]
    fn test_cells_plain() {
        let columns = report_columns(ViewMode::Monthly, Indicator::All, false);
        let row = sample();
        let cells: Vec<String> = columns.iter().map(|c| c.cell(&row, 0)).collect();
        assert_eq!(cells, vec!["Tháng 6", "9.8", "48.9", "29.3", "1/6/2024"]);
    }

    #[test]
    fn test_cells_colored_contain_ansi() {
        let columns = report_columns(ViewMode::Monthly, Indicator::Uv, true);
        let cell = columns[1].cell(&sample(), 0);
        assert!(cell.contains("\x1b["));
        assert!(cell.contains("9.8"));
    }
}
