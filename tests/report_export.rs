use std::fs::File;
use std::io::Read;
use std::path::Path;

use aqreport::export::{ExportAdapter, ExportSheet, export_filename};
use aqreport::provider::{MockProvider, ReportQuery, fetch_report};
use aqreport::report::{Indicator, ReportRow, ViewMode, report_columns};
use aqreport::table::{DataTable, TableOptions};
use calamine::{Reader, Xlsx, open_workbook};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `width` attributes of the `<col>` entries in the first worksheet
fn column_widths(path: &Path) -> Vec<f64> {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut xml = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut xml)
        .unwrap();

    xml.split("<col ")
        .skip(1)
        .map(|col| {
            let attr = col.split("width=\"").nth(1).unwrap();
            attr[..attr.find('"').unwrap()].parse().unwrap()
        })
        .collect()
}

fn load(view: ViewMode, from: NaiveDate, to: NaiveDate) -> Vec<ReportRow> {
    let provider = MockProvider::instant();
    let query = ReportQuery {
        station_id: "A001".to_string(),
        view,
        from,
        to,
    };
    tokio_test::block_on(fetch_report(&provider, &query)).unwrap()
}

#[test]
fn test_monthly_report_pages() {
    let rows = load(ViewMode::Monthly, date(2024, 1, 1), date(2024, 12, 31));
    assert_eq!(rows.len(), 12);

    let mut table = DataTable::new(
        report_columns(ViewMode::Monthly, Indicator::All, false),
        rows,
        TableOptions {
            page_size: 10,
            show_index: true,
            ..TableOptions::default()
        },
    );
    assert_eq!(table.total_pages(), 2);
    assert_eq!(table.visible_rows().len(), 10);

    table.next_page();
    let page = table.render();
    assert_eq!(page.rows().len(), 2);
    assert_eq!(page.rows()[0][0], "11");
    assert_eq!(page.rows()[1][1], "Tháng 12");
    assert_eq!(page.summary.as_deref(), Some("Hiển thị 11-12 của 12 kết quả"));
}

#[test]
fn test_export_covers_whole_filtered_set() {
    let rows = load(ViewMode::Daily, date(2024, 6, 10), date(2024, 6, 24));
    assert_eq!(rows.len(), 15);

    // Only the first page is on screen; the export still takes every row
    let table = DataTable::new(
        report_columns(ViewMode::Daily, Indicator::Pm25, false),
        rows,
        TableOptions {
            page_size: 5,
            ..TableOptions::default()
        },
    );
    assert_eq!(table.visible_records().len(), 5);

    let dir = tempfile::tempdir().unwrap();
    let summary = ExportAdapter::new(dir.path())
        .export_dated(
            table.records(),
            ViewMode::Daily,
            Indicator::Pm25,
            Some("Trạm Quan Trắc 1"),
            date(2024, 6, 25),
        )
        .unwrap();

    assert_eq!(summary.rows, 15);
    assert_eq!(summary.columns, 4);
    assert_eq!(
        summary.path,
        dir.path()
            .join(export_filename(Some("Trạm Quan Trắc 1"), date(2024, 6, 25)))
    );

    // xlsx files are zip archives
    let mut magic = [0u8; 2];
    std::fs::File::open(&summary.path)
        .unwrap()
        .read_exact(&mut magic)
        .unwrap();
    assert_eq!(&magic, b"PK");
}

#[test]
fn test_export_headers_follow_view() {
    let rows = load(ViewMode::Monthly, date(2024, 1, 1), date(2024, 3, 31));
    let sheet = ExportSheet::build(&rows, ViewMode::Monthly, Indicator::All).unwrap();
    assert_eq!(sheet.rows.len(), 3);
    assert_eq!(sheet.headers[1], "THÁNG");
    assert_eq!(sheet.headers.last().map(String::as_str), Some("NGÀY CẬP NHẬT"));
}

#[test]
fn test_empty_range_exports_nothing() {
    let rows = load(ViewMode::Daily, date(2024, 1, 1), date(2024, 1, 31));
    assert!(rows.is_empty());

    let dir = tempfile::tempdir().unwrap();
    let err = ExportAdapter::new(dir.path())
        .export(&rows, ViewMode::Daily, Indicator::All, None)
        .unwrap_err();
    assert!(err.to_string().contains("No records to export"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_written_workbook_reads_back() {
    let rows = load(ViewMode::Daily, date(2024, 6, 1), date(2024, 6, 12));
    assert_eq!(rows.len(), 12);

    let dir = tempfile::tempdir().unwrap();
    let summary = ExportAdapter::new(dir.path())
        .export(&rows, ViewMode::Daily, Indicator::Uv, Some("A001"))
        .unwrap();

    let mut workbook: Xlsx<_> = open_workbook(&summary.path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Báo cáo theo ngày".to_string()]);

    let range = workbook.worksheet_range("Báo cáo theo ngày").unwrap();
    assert_eq!(range.height(), 13);
    assert_eq!(range.width(), 4);

    let cells: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();
    assert_eq!(cells[0], vec!["STT", "NGÀY", "UV INDEX", "NGÀY CẬP NHẬT"]);
    assert_eq!(cells[1][0], "1");
    assert_eq!(cells[1][1], "Ngày 1");
    assert_eq!(cells[12][0], "12");
    assert_eq!(cells[12][1], "Ngày 12");

    // Stored widths include the writer's cell padding
    let widths = column_widths(&summary.path);
    let expected = [5.0, 15.0, 12.0, 15.0];
    assert_eq!(widths.len(), expected.len());
    for (written, requested) in widths.iter().zip(expected) {
        assert!(
            *written >= requested && *written < requested + 1.0,
            "width {written} for requested {requested}"
        );
    }
}
