//! Descriptive statistics over a filtered dataset.
//!
//! Four independent, stateless aggregators. Each is a pure function of
//! its input dataset and records the wall-clock time spent computing its
//! report. They share the same immutable dataset and may run in any
//! order.

use std::time::{Duration, Instant};

use chrono::Weekday;
use stats_core::calculations::{counts_desc, mode};
use stats_core::error::{Result, StatsError};
use stats_core::models::Dataset;
use tracing::debug;

// ── TimeStats ─────────────────────────────────────────────────────────────────

/// Most frequent travel times for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeReport {
    /// Most common calendar month (1–12).
    pub common_month: u32,
    /// Most common day of week.
    pub common_day: Weekday,
    /// Most common start hour (0–23).
    pub common_start_hour: u32,
    /// Wall-clock time spent computing this report.
    pub elapsed: Duration,
}

/// Statistics on the most frequent times of travel.
pub struct TimeStats;

impl TimeStats {
    /// Compute mode month, weekday, and start hour.
    ///
    /// Fails with [`StatsError::InsufficientData`] on an empty dataset: no
    /// mode is defined over zero records.
    pub fn compute(dataset: &Dataset) -> Result<TimeReport> {
        let started = Instant::now();
        let records = dataset.records();

        let common_month = mode(records.iter().map(|t| t.month()))
            .ok_or(StatsError::InsufficientData("most common month"))?;
        let common_day = mode(records.iter().map(|t| t.weekday()))
            .ok_or(StatsError::InsufficientData("most common day"))?;
        let common_start_hour = mode(records.iter().map(|t| t.start_hour()))
            .ok_or(StatsError::InsufficientData("most common start hour"))?;

        let elapsed = started.elapsed();
        debug!("TimeStats over {} trips in {:?}", records.len(), elapsed);

        Ok(TimeReport {
            common_month,
            common_day,
            common_start_hour,
            elapsed,
        })
    }
}

// ── StationStats ──────────────────────────────────────────────────────────────

/// Most popular stations and station pair for a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationReport {
    /// Most commonly used start station.
    pub common_start_station: String,
    /// Most commonly used end station.
    pub common_end_station: String,
    /// Most frequent (start, end) station combination.
    pub common_trip: (String, String),
    /// Wall-clock time spent computing this report.
    pub elapsed: Duration,
}

/// Statistics on the most popular stations and trip.
pub struct StationStats;

impl StationStats {
    /// Compute mode start station, end station, and (start, end) pair.
    ///
    /// The pair groups by the combined key; the largest group wins, ties
    /// broken by first-encountered pair. Fails with
    /// [`StatsError::InsufficientData`] on an empty dataset.
    pub fn compute(dataset: &Dataset) -> Result<StationReport> {
        let started = Instant::now();
        let records = dataset.records();

        let common_start_station = mode(records.iter().map(|t| t.start_station.as_str()))
            .ok_or(StatsError::InsufficientData("most common start station"))?
            .to_string();
        let common_end_station = mode(records.iter().map(|t| t.end_station.as_str()))
            .ok_or(StatsError::InsufficientData("most common end station"))?
            .to_string();
        let common_trip = mode(
            records
                .iter()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )
        .map(|(start, end)| (start.to_string(), end.to_string()))
        .ok_or(StatsError::InsufficientData("most common trip"))?;

        let elapsed = started.elapsed();
        debug!("StationStats over {} trips in {:?}", records.len(), elapsed);

        Ok(StationReport {
            common_start_station,
            common_end_station,
            common_trip,
            elapsed,
        })
    }
}

// ── DurationStats ─────────────────────────────────────────────────────────────

/// Total and mean trip duration for a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationReport {
    /// Exact sum of trip durations in seconds; 0 for an empty dataset.
    pub total_seconds: i64,
    /// Arithmetic mean duration in seconds; `None` for an empty dataset.
    pub mean_seconds: Option<f64>,
    /// Wall-clock time spent computing this report.
    pub elapsed: Duration,
}

/// Statistics on total and average trip duration.
pub struct DurationStats;

impl DurationStats {
    /// Compute the duration sum and mean.
    ///
    /// Never fails: the sum over zero records is 0, and the undefined mean
    /// is reported as `None` rather than a NaN.
    pub fn compute(dataset: &Dataset) -> DurationReport {
        let started = Instant::now();
        let records = dataset.records();

        let total_seconds: i64 = records.iter().map(|t| t.duration_seconds).sum();
        let mean_seconds = if records.is_empty() {
            None
        } else {
            Some(total_seconds as f64 / records.len() as f64)
        };

        let elapsed = started.elapsed();
        debug!("DurationStats over {} trips in {:?}", records.len(), elapsed);

        DurationReport {
            total_seconds,
            mean_seconds,
            elapsed,
        }
    }
}

// ── UserStats ─────────────────────────────────────────────────────────────────

/// Birth-year extremes and mode, present only when the city publishes
/// birth years and at least one row carries a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearReport {
    /// Earliest (minimum) birth year.
    pub earliest: i32,
    /// Most recent (maximum) birth year.
    pub latest: i32,
    /// Most common birth year, first-encountered tie-break.
    pub most_common: i32,
}

/// Rider demographics for a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct UserReport {
    /// Trip counts per user type, descending by count.
    pub user_types: Vec<(String, u64)>,
    /// Trip counts per gender, descending; `None` when the city's schema
    /// has no Gender column.
    pub gender_counts: Option<Vec<(String, u64)>>,
    /// Birth-year statistics; `None` when the schema has no Birth Year
    /// column or no row carries a usable value.
    pub birth_years: Option<BirthYearReport>,
    /// Wall-clock time spent computing this report.
    pub elapsed: Duration,
}

/// Statistics on bikeshare riders.
pub struct UserStats;

impl UserStats {
    /// Compute user-type counts plus the demographic sections the city's
    /// schema supports.
    ///
    /// Fails with [`StatsError::InsufficientData`] on an empty dataset.
    /// Sections for absent columns are omitted, not errors; rows with a
    /// blank cell in a present column are skipped for that statistic.
    pub fn compute(dataset: &Dataset) -> Result<UserReport> {
        let started = Instant::now();
        let records = dataset.records();

        if records.is_empty() {
            return Err(StatsError::InsufficientData("user statistics"));
        }

        let user_types: Vec<(String, u64)> =
            counts_desc(records.iter().map(|t| t.user_type.as_str()))
                .into_iter()
                .map(|(user_type, count)| (user_type.to_string(), count))
                .collect();

        let gender_counts = if dataset.schema().has_gender {
            Some(
                counts_desc(records.iter().filter_map(|t| t.gender.as_deref()))
                    .into_iter()
                    .map(|(gender, count)| (gender.to_string(), count))
                    .collect(),
            )
        } else {
            None
        };

        let birth_years = if dataset.schema().has_birth_year {
            let years: Vec<i32> = records.iter().filter_map(|t| t.birth_year).collect();
            match (years.iter().min(), years.iter().max(), mode(years.iter().copied())) {
                (Some(&earliest), Some(&latest), Some(most_common)) => Some(BirthYearReport {
                    earliest,
                    latest,
                    most_common,
                }),
                _ => None,
            }
        } else {
            None
        };

        let elapsed = started.elapsed();
        debug!("UserStats over {} trips in {:?}", records.len(), elapsed);

        Ok(UserReport {
            user_types,
            gender_counts,
            birth_years,
            elapsed,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
