use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::browse::Browser;
use crate::error::Result;
use crate::export::ExportAdapter;
use crate::formatter::{Colorizer, TableFormatter};
use crate::provider::{self, MockProvider, ReportProvider, ReportQuery, Station};
use crate::report::{ReportRow, ReportSummary, report_columns};
use crate::state::{AppState, JsonFileStore};
use crate::table::{Align, Column, DataTable, TableOptions};

use super::{CliInterface, DEFAULT_STATION, PageArgs, QueryArgs};

/// A fetched report with its station
struct LoadedReport {
    station: Station,
    rows: Vec<ReportRow>,
}

impl CliInterface {
    /// List known stations
    pub(super) async fn list_stations(&self) -> Result<()> {
        let provider = self.provider();
        let stations = provider.stations().await?;
        let colorizer = self.colorizer();

        let columns = vec![
            Column::new("id", "Mã trạm", |s: &Station| Some(s.id.clone())),
            Column::new("name", "Tên trạm", |s: &Station| Some(s.name.clone())),
            Column::new("location", "Tọa độ", |s: &Station| {
                Some(format!("{:.4}, {:.4}", s.latitude, s.longitude))
            })
            .with_align(Align::Right),
            Column::new("status", "Trạng thái", |s: &Station| {
                Some(s.status.label().to_string())
            })
            .with_render(move |s: &Station, _| colorizer.station_status(s.status)),
        ];

        let page_size = stations.len().max(1);
        let table = DataTable::new(
            columns,
            stations,
            TableOptions {
                page_size,
                show_index: true,
                ..TableOptions::from(&self.config().table)
            },
        );

        println!("{}", self.table_formatter().format_table(&table.render()));
        Ok(())
    }

    /// Print one page of a report with summary statistics
    pub(super) async fn print_report(&self, query: &QueryArgs, page: &PageArgs) -> Result<()> {
        let state = self.app_state();
        let report = self.load_report(&state, query).await?;
        let table = self.report_table(&state, query, page, report.rows.clone())?;

        println!("{}", self.report_heading(&report.station, query));
        println!("{}", self.table_formatter().format_page(&table.render()));

        if let Some(summary) = ReportSummary::from_rows(&report.rows) {
            println!("{}", self.colorizer().info(&summary.describe()));
        }
        Ok(())
    }

    /// Write the filtered report to a workbook
    pub(super) async fn export_report(&self, query: &QueryArgs, output: Option<&Path>) -> Result<()> {
        let state = self.app_state();
        let report = self.load_report(&state, query).await?;
        let colorizer = self.colorizer();

        if report.rows.is_empty() {
            println!("{}", colorizer.warning("Không có dữ liệu để xuất"));
            return Ok(());
        }

        let adapter = ExportAdapter::new(output.unwrap_or(self.config().export.output_dir.as_path()));
        let summary = adapter.export(
            &report.rows,
            query.view,
            query.indicator,
            Some(&report.station.name),
        )?;

        println!(
            "{}",
            colorizer.success(&format!(
                "Đã xuất {} dòng, {} cột: {}",
                summary.rows,
                summary.columns,
                summary.path.display()
            ))
        );
        Ok(())
    }

    /// Open the interactive pager
    pub(super) async fn browse_report(&self, query: &QueryArgs, page: &PageArgs) -> Result<()> {
        let state = self.app_state();
        let report = self.load_report(&state, query).await?;
        let table = self.report_table(&state, query, page, report.rows)?;

        println!("{}", self.report_heading(&report.station, query));

        let mut browser = Browser::new(
            table,
            self.table_formatter(),
            ExportAdapter::new(&self.config().export.output_dir),
            state,
            query.view,
            query.indicator,
            report.station.name,
        );
        browser.run()
    }

    fn provider(&self) -> MockProvider {
        MockProvider::new(self.config().provider_latency())
    }

    fn colorizer(&self) -> Colorizer {
        Colorizer::new(self.use_colors())
    }

    fn table_formatter(&self) -> TableFormatter {
        TableFormatter::from_config(&self.config().display, self.use_colors())
    }

    /// Persistent state, or a throwaway in-memory state if the file is unusable
    fn app_state(&self) -> AppState {
        let path = &self.config().state.file_path;
        match JsonFileStore::open(path) {
            Ok(store) => AppState::new(Arc::new(store)),
            Err(e) => {
                warn!("Ignoring state file {}: {}", path.display(), e);
                AppState::in_memory()
            }
        }
    }

    async fn load_report(&self, state: &AppState, query: &QueryArgs) -> Result<LoadedReport> {
        let station_id = match &query.station {
            Some(id) => id.clone(),
            None => state
                .last_station()?
                .unwrap_or_else(|| DEFAULT_STATION.to_string()),
        };

        let provider = self.provider();
        let station = provider::find_station(&provider, &station_id).await?;

        let (from, to) = query.date_range();
        let rows = provider::fetch_report(
            &provider,
            &ReportQuery {
                station_id: station.id.clone(),
                view: query.view,
                from,
                to,
            },
        )
        .await?;

        if let Err(e) = state.set_last_station(&station.id) {
            warn!("Could not remember station {}: {}", station.id, e);
        }

        Ok(LoadedReport { station, rows })
    }

    fn report_table(
        &self,
        state: &AppState,
        query: &QueryArgs,
        page: &PageArgs,
        rows: Vec<ReportRow>,
    ) -> Result<DataTable<ReportRow>> {
        let mut options = TableOptions::from(&self.config().table);
        if let Some(size) = page.page_size.or(state.page_size()?) {
            options.page_size = size;
        }
        if page.no_index {
            options.show_index = false;
        }
        debug!(
            "Report table: page size {}, index {}",
            options.page_size, options.show_index
        );

        let columns = report_columns(query.view, query.indicator, self.use_colors());
        let mut table = DataTable::new(columns, rows, options);
        table.go_to_page(page.page);
        Ok(table)
    }

    fn report_heading(&self, station: &Station, query: &QueryArgs) -> String {
        let (from, to) = query.date_range();
        format!(
            "{} ({}) | {} | {} → {}",
            station.name,
            station.id,
            query.view.sheet_name(),
            from.format("%d/%m/%Y"),
            to.format("%d/%m/%Y")
        )
    }
}
