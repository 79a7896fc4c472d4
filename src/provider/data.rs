//! Reference readings served by the mock provider.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Station, StationStatus};

/// Twelve monthly baselines for one station
pub(crate) struct StationSeries {
    pub station: Station,
    pub uv: [f64; 12],
    pub pm25: [f64; 12],
    pub pm1_0: [f64; 12],
}

/// Scaling applied to the baselines for a given year
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct YearFactors {
    pub uv: f64,
    pub pm25: f64,
    pub pm1_0: f64,
}

/// Years with recorded history, newest first
pub const AVAILABLE_YEARS: [i32; 5] = [2024, 2023, 2022, 2021, 2020];

/// Factors for `year`; years without history use the 2024 baseline
pub(crate) fn year_factors(year: i32) -> YearFactors {
    match year {
        2023 => YearFactors {
            uv: 0.95,
            pm25: 1.08,
            pm1_0: 1.06,
        },
        2022 => YearFactors {
            uv: 0.92,
            pm25: 1.15,
            pm1_0: 1.12,
        },
        2021 => YearFactors {
            uv: 0.88,
            pm25: 1.22,
            pm1_0: 1.18,
        },
        2020 => YearFactors {
            uv: 0.85,
            pm25: 1.28,
            pm1_0: 1.25,
        },
        _ => YearFactors {
            uv: 1.0,
            pm25: 1.0,
            pm1_0: 1.0,
        },
    }
}

pub(crate) fn station_series() -> Vec<StationSeries> {
    vec![
        StationSeries {
            station: Station {
                id: "A001".to_string(),
                name: "Trung Tâm R&D".to_string(),
                latitude: 10.8412,
                longitude: 106.8098,
                status: StationStatus::Online,
            },
            uv: [7.2, 7.8, 8.4, 8.9, 9.2, 9.8, 10.1, 9.7, 9.3, 8.6, 8.1, 7.5],
            pm25: [28.5, 26.2, 24.8, 22.1, 25.7, 29.3, 32.4, 35.1, 31.8, 28.9, 30.2, 33.6],
            pm1_0: [45.2, 42.8, 40.1, 38.7, 44.5, 48.9, 52.3, 55.8, 51.2, 47.6, 49.3, 53.1],
        },
        StationSeries {
            station: Station {
                id: "A002".to_string(),
                name: "Ban Quản Lý Khu CNC".to_string(),
                latitude: 10.8503,
                longitude: 106.7955,
                status: StationStatus::Online,
            },
            uv: [6.8, 7.4, 8.0, 8.5, 8.8, 9.4, 9.7, 9.3, 8.9, 8.2, 7.7, 7.1],
            pm25: [25.1, 23.8, 21.5, 19.7, 23.3, 26.9, 29.8, 32.5, 28.4, 25.6, 27.8, 30.2],
            pm1_0: [41.8, 39.4, 36.7, 35.3, 41.1, 45.5, 48.9, 52.4, 47.8, 44.2, 46.9, 49.7],
        },
        StationSeries {
            station: Station {
                id: "A003".to_string(),
                name: "Vườn Ươm Doanh Nghiệp".to_string(),
                latitude: 10.8367,
                longitude: 106.8012,
                status: StationStatus::Maintenance,
            },
            uv: [7.6, 8.2, 8.8, 9.3, 9.6, 10.2, 10.5, 10.1, 9.7, 9.0, 8.5, 7.9],
            pm25: [31.2, 28.9, 26.5, 24.2, 28.1, 31.7, 35.0, 38.2, 34.5, 31.3, 33.6, 36.9],
            pm1_0: [48.6, 46.2, 43.5, 42.1, 47.9, 52.3, 55.7, 59.2, 54.6, 51.0, 53.7, 56.5],
        },
    ]
}

/// Which series a [`Jitter`] stream feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Series {
    Monthly,
    Daily,
}

/// Seeded variation source for one station and year
///
/// The same (station, year, series) always replays the same factors, so
/// repeated requests return identical rows.
pub(crate) struct Jitter {
    rng: StdRng,
}

impl Jitter {
    pub fn new(station_index: usize, year: i32, series: Series) -> Self {
        let stream: u64 = match series {
            Series::Monthly => 0,
            Series::Daily => 1,
        };
        let seed = ((station_index as u64) << 33) | (stream << 32) | u64::from(year as u32);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Next factor in `[0.95, 1.05)`
    pub fn next_factor(&mut self) -> f64 {
        self.rng.gen_range(0.95..1.05)
    }
}

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
