//! CSV file loading for Bikeshare Stats.
//!
//! Reads the per-city trip files (e.g. `chicago.csv`) and converts each
//! row into a [`TripRecord`] for downstream filtering and aggregation.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Deserialize;
use stats_core::error::{Result, StatsError};
use stats_core::models::{City, Dataset, DatasetSchema, TripRecord};
use tracing::{debug, warn};

/// Columns every city's file must carry, by exact header name.
const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

/// Timestamp formats seen across the source files.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

// ── DataSource ────────────────────────────────────────────────────────────────

/// Maps a [`City`] to its backing CSV file and loads it into a [`Dataset`].
///
/// Owns the data directory; the city→file-name mapping itself is the fixed
/// table on [`City::file_name`]. No caching: every [`load`](Self::load)
/// call re-reads the file from disk.
#[derive(Debug, Clone)]
pub struct DataSource {
    data_dir: PathBuf,
}

impl DataSource {
    /// Create a data source rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The file a given city resolves to under this source.
    pub fn file_path(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Load and parse the trip file for `city`.
    ///
    /// Row order is preserved. Fails with [`StatsError::FieldParse`] on the
    /// first malformed timestamp, duration, or birth-year cell; recovery is
    /// the caller's decision, not the reader's.
    pub fn load(&self, city: City) -> Result<Dataset> {
        let path = self.file_path(city);
        let file = std::fs::File::open(&path).map_err(|source| {
            warn!("Failed to open data file {}: {}", path.display(), source);
            StatsError::FileRead {
                path: path.clone(),
                source,
            }
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let schema = validate_headers(city, &headers)?;

        let mut records: Vec<TripRecord> = Vec::new();
        for (index, row) in reader.deserialize::<RawTrip>().enumerate() {
            // Header occupies line 1; the first data row is line 2.
            let line = index as u64 + 2;
            let raw = row?;
            records.push(map_to_trip(raw, line)?);
        }

        debug!(
            "Loaded {} trips for {} from {}",
            records.len(),
            city,
            path.display()
        );

        Ok(Dataset::new(city, schema, records))
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// One CSV row as it appears on disk, before type conversion.
///
/// Unknown columns (the files carry a leading unnamed index column) are
/// ignored; the optional demographic columns deserialize to `None` when
/// the column is absent from the header row entirely.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time")]
    end_time: String,
    #[serde(rename = "Trip Duration")]
    trip_duration: String,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type")]
    user_type: String,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    birth_year: Option<String>,
}

/// Check the required columns are all present and derive the schema
/// descriptor from the optional ones.
fn validate_headers(city: City, headers: &[String]) -> Result<DatasetSchema> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(StatsError::MissingColumn {
                city: city.to_string(),
                column,
            });
        }
    }
    Ok(DatasetSchema {
        has_gender: headers.iter().any(|h| h == "Gender"),
        has_birth_year: headers.iter().any(|h| h == "Birth Year"),
    })
}

/// Convert a raw row into a typed [`TripRecord`], reporting the failing
/// field and source line on error.
fn map_to_trip(raw: RawTrip, line: u64) -> Result<TripRecord> {
    let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| StatsError::FieldParse {
        row: line,
        field: "Start Time",
        value: raw.start_time.clone(),
    })?;
    let end_time = parse_timestamp(&raw.end_time).ok_or_else(|| StatsError::FieldParse {
        row: line,
        field: "End Time",
        value: raw.end_time.clone(),
    })?;
    let duration_seconds =
        parse_integral(&raw.trip_duration).ok_or_else(|| StatsError::FieldParse {
            row: line,
            field: "Trip Duration",
            value: raw.trip_duration.clone(),
        })?;

    // A present column may still have blank cells on individual rows.
    let gender = raw
        .gender
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty());

    let birth_year = match raw.birth_year.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => {
            let year = parse_integral(value)
                .and_then(|y| i32::try_from(y).ok())
                .ok_or_else(|| StatsError::FieldParse {
                    row: line,
                    field: "Birth Year",
                    value: value.to_string(),
                })?;
            Some(year)
        }
    };

    Ok(TripRecord {
        start_time,
        end_time,
        duration_seconds,
        start_station: raw.start_station,
        end_station: raw.end_station,
        user_type: raw.user_type,
        gender,
        birth_year,
    })
}

/// Parse a source timestamp string into a [`NaiveDateTime`].
///
/// The files carry naive local timestamps; both plain and
/// fractional-seconds forms appear.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
}

/// Parse an integer cell that may be written as `"671"` or `"671.0"`.
///
/// A value with a non-zero fractional part is rejected: truncating it
/// would silently lose precision.
fn parse_integral(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Some(n);
    }
    let f = trimmed.parse::<f64>().ok()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    if f < i64::MIN as f64 || f > i64::MAX as f64 {
        return None;
    }
    Some(f as i64)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
