use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use super::data::{Jitter, Series, StationSeries, round1, station_series, year_factors};
use super::{ReportProvider, Station};
use crate::error::{ProviderError, Result};
use crate::report::ReportRow;

/// Month used for daily reports
const SAMPLE_MONTH: u32 = 6;

/// Number of days in the sample month
const SAMPLE_DAYS: u32 = 30;

/// In-memory provider with simulated response latency
pub struct MockProvider {
    series: Vec<StationSeries>,
    latency: Duration,
}

impl MockProvider {
    /// Create a provider that waits `latency` before every response
    pub fn new(latency: Duration) -> Self {
        Self {
            series: station_series(),
            latency,
        }
    }

    /// Provider without artificial delay
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Position and readings of `station_id`
    fn series(&self, station_id: &str) -> Result<(usize, &StationSeries)> {
        self.series
            .iter()
            .enumerate()
            .find(|(_, s)| s.station.id == station_id)
            .ok_or_else(|| ProviderError::UnknownStation(station_id.to_string()).into())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl ReportProvider for MockProvider {
    async fn stations(&self) -> Result<Vec<Station>> {
        self.simulate_latency().await;
        Ok(self.series.iter().map(|s| s.station.clone()).collect())
    }

    async fn monthly(&self, station_id: &str, year: i32) -> Result<Vec<ReportRow>> {
        self.simulate_latency().await;
        let (index, series) = self.series(station_id)?;
        let factors = year_factors(year);
        let mut jitter = Jitter::new(index, year, Series::Monthly);

        let mut rows = Vec::with_capacity(12);
        for (idx, month) in (1..=12u32).enumerate() {
            let uv = series.uv[idx] * factors.uv * jitter.next_factor();
            let pm25 = series.pm25[idx] * factors.pm25 * jitter.next_factor();
            let pm1_0 = series.pm1_0[idx] * factors.pm1_0 * jitter.next_factor();
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
                rows.push(ReportRow {
                    period: format!("Tháng {month}"),
                    uv: round1(uv),
                    pm25: round1(pm25),
                    pm1_0: round1(pm1_0),
                    date,
                });
            }
        }

        debug!("Mock monthly data: {} rows for {station_id}/{year}", rows.len());
        Ok(rows)
    }

    async fn daily(&self, station_id: &str, year: i32) -> Result<Vec<ReportRow>> {
        self.simulate_latency().await;
        let (index, series) = self.series(station_id)?;
        let factors = year_factors(year);
        let month = (SAMPLE_MONTH - 1) as usize;
        let mut jitter = Jitter::new(index, year, Series::Daily);

        let mut rows = Vec::with_capacity(SAMPLE_DAYS as usize);
        for day in 1..=SAMPLE_DAYS {
            let uv = series.uv[month] * factors.uv * jitter.next_factor();
            let pm25 = series.pm25[month] * factors.pm25 * jitter.next_factor();
            let pm1_0 = series.pm1_0[month] * factors.pm1_0 * jitter.next_factor();
            if let Some(date) = NaiveDate::from_ymd_opt(year, SAMPLE_MONTH, day) {
                rows.push(ReportRow {
                    period: format!("Ngày {day}"),
                    uv: round1(uv),
                    pm25: round1(pm25),
                    pm1_0: round1(pm1_0),
                    date,
                });
            }
        }

        debug!("Mock daily data: {} rows for {station_id}/{year}", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_monthly_rows_are_deterministic() {
        let provider = MockProvider::instant();
        let a = provider.monthly("A001", 2023).await.unwrap();
        let b = provider.monthly("A001", 2023).await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[tokio::test]
    async fn test_monthly_values_stay_near_baseline() {
        let provider = MockProvider::instant();
        let rows = provider.monthly("A001", 2024).await.unwrap();
        // January UV baseline is 7.2
        assert!(rows[0].uv >= 6.8 && rows[0].uv <= 7.6, "uv {}", rows[0].uv);
    }

    #[tokio::test]
    async fn test_daily_covers_sample_month() {
        let provider = MockProvider::instant();
        let rows = provider.daily("A002", 2022).await.unwrap();
        assert_eq!(rows.len(), 30);
        assert_eq!(rows[0].period, "Ngày 1");
        assert_eq!(rows[29].date, NaiveDate::from_ymd_opt(2022, 6, 30).unwrap());
    }

    #[tokio::test]
    async fn test_unknown_station() {
        let provider = MockProvider::instant();
        let err = provider.monthly("nope", 2024).await.unwrap_err();
        assert_eq!(err.to_string(), "Data error: Unknown station: nope");
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let provider = MockProvider::new(Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        provider.stations().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
