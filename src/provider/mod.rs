//! Report data providers
//!
//! Readings are obtained through the async [`ReportProvider`] trait, so the
//! table and the export never depend on where data comes from or how long it
//! takes. [`MockProvider`] serves built-in reference readings after a
//! configurable delay.

pub mod data;
pub mod mock;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ProviderError, Result};
use crate::report::{ReportRow, ViewMode};

pub use data::AVAILABLE_YEARS;
pub use mock::MockProvider;

/// Operational status of a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Online,
    Offline,
    Maintenance,
}

impl StationStatus {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            StationStatus::Online => "Hoạt động",
            StationStatus::Offline => "Ngoại tuyến",
            StationStatus::Maintenance => "Bảo trì",
        }
    }
}

/// A monitoring station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub status: StationStatus,
}

/// Source of station metadata and readings
#[async_trait]
pub trait ReportProvider: Send + Sync {
    /// All known stations
    async fn stations(&self) -> Result<Vec<Station>>;

    /// Twelve monthly rows for `year`
    async fn monthly(&self, station_id: &str, year: i32) -> Result<Vec<ReportRow>>;

    /// Daily rows for the sample month of `year`
    async fn daily(&self, station_id: &str, year: i32) -> Result<Vec<ReportRow>>;
}

/// Parameters of one report search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub station_id: String,
    pub view: ViewMode,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportQuery {
    /// Reject ranges whose start is after their end
    pub fn validate(&self) -> Result<()> {
        if self.from > self.to {
            return Err(ProviderError::InvalidRange {
                from: self.from.to_string(),
                to: self.to.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Look up a station by id
pub async fn find_station(provider: &dyn ReportProvider, station_id: &str) -> Result<Station> {
    provider
        .stations()
        .await?
        .into_iter()
        .find(|s| s.id == station_id)
        .ok_or_else(|| ProviderError::UnknownStation(station_id.to_string()).into())
}

/// Run a report search
///
/// Data is fetched for the year of `from` and then filtered to the
/// inclusive date range.
///
/// # Arguments
/// * `provider` - Data source
/// * `query` - Station, view mode and date range
///
/// # Returns
/// * `Result<Vec<ReportRow>>` - Rows inside the range, in date order
pub async fn fetch_report(
    provider: &dyn ReportProvider,
    query: &ReportQuery,
) -> Result<Vec<ReportRow>> {
    query.validate()?;

    let year = query.from.year();
    debug!(
        "Fetching {:?} report for {} ({} .. {})",
        query.view, query.station_id, query.from, query.to
    );

    let rows = match query.view {
        ViewMode::Monthly => provider.monthly(&query.station_id, year).await?,
        ViewMode::Daily => provider.daily(&query.station_id, year).await?,
    };

    let filtered: Vec<ReportRow> = rows
        .into_iter()
        .filter(|r| r.in_range(query.from, query.to))
        .collect();

    info!("Report for {} has {} row(s)", query.station_id, filtered.len());
    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_monthly_full_year() {
        let provider = MockProvider::instant();
        let query = ReportQuery {
            station_id: "A001".into(),
            view: ViewMode::Monthly,
            from: date(2024, 1, 1),
            to: date(2024, 12, 31),
        };
        let rows = fetch_report(&provider, &query).await.unwrap();
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].period, "Tháng 1");
        assert_eq!(rows[11].date, date(2024, 12, 1));
    }

    #[tokio::test]
    async fn test_fetch_filters_range_inclusively() {
        let provider = MockProvider::instant();
        let query = ReportQuery {
            station_id: "A002".into(),
            view: ViewMode::Monthly,
            from: date(2024, 3, 1),
            to: date(2024, 5, 1),
        };
        let rows = fetch_report(&provider, &query).await.unwrap();
        let periods: Vec<&str> = rows.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(periods, vec!["Tháng 3", "Tháng 4", "Tháng 5"]);
    }

    #[tokio::test]
    async fn test_fetch_daily_outside_sample_month_is_empty() {
        let provider = MockProvider::instant();
        let query = ReportQuery {
            station_id: "A001".into(),
            view: ViewMode::Daily,
            from: date(2024, 1, 1),
            to: date(2024, 3, 31),
        };
        assert!(fetch_report(&provider, &query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected() {
        let provider = MockProvider::instant();
        let query = ReportQuery {
            station_id: "A001".into(),
            view: ViewMode::Monthly,
            from: date(2024, 6, 1),
            to: date(2024, 1, 1),
        };
        let err = fetch_report(&provider, &query).await.unwrap_err();
        assert!(err.to_string().contains("after end date"));
    }

    #[tokio::test]
    async fn test_find_station() {
        let provider = MockProvider::instant();
        let station = find_station(&provider, "A003").await.unwrap();
        assert_eq!(station.name, "Vườn Ươm Doanh Nghiệp");
        assert!(find_station(&provider, "Z999").await.is_err());
    }
}
