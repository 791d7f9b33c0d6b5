use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StatsError};

// ── City ──────────────────────────────────────────────────────────────────────

/// The fixed set of cities with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// File name of the backing CSV for this city.
    ///
    /// The city→file mapping is a fixed external contract; the files live
    /// under the data directory owned by the `DataSource`.
    pub fn file_name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// The canonical lowercase identifier for this city.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for City {
    type Err = StatsError;

    /// Case-insensitive construction from a string slice.
    ///
    /// Accepts `"chicago"`, `"new york city"` (also with underscores or
    /// dashes), and `"washington"`. Returns [`StatsError::UnknownCity`]
    /// for anything else.
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "chicago" => Ok(City::Chicago),
            "new york city" | "new_york_city" | "new-york-city" => Ok(City::NewYorkCity),
            "washington" => Ok(City::Washington),
            other => Err(StatsError::UnknownCity(other.to_string())),
        }
    }
}

// ── Month ─────────────────────────────────────────────────────────────────────

/// Months covered by the source data.
///
/// The published files only span January through June, so the filterable
/// range stops there. A loaded record may still carry any derived month
/// value 1–12; only the *filter* vocabulary is restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// 1-based calendar number of this month (January = 1 … June = 6).
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    /// The canonical lowercase name of this month.
    pub fn as_str(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = StatsError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "january" => Ok(Month::January),
            "february" => Ok(Month::February),
            "march" => Ok(Month::March),
            "april" => Ok(Month::April),
            "may" => Ok(Month::May),
            "june" => Ok(Month::June),
            other => Err(StatsError::UnknownMonth(other.to_string())),
        }
    }
}

// ── Filter criteria ───────────────────────────────────────────────────────────

/// Optional month narrowing: either keep everything or a single month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(Month),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => m.fmt(f),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = StatsError;

    /// Accepts `"all"` or a month name from January through June.
    fn from_str(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(MonthFilter::All);
        }
        value.parse::<Month>().map(MonthFilter::Month)
    }
}

/// Optional weekday narrowing: either keep everything or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => write!(f, "{}", weekday_name(*d)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = StatsError;

    /// Accepts `"all"` or a full weekday name, case-insensitively.
    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        match trimmed.to_lowercase().as_str() {
            "monday" => Ok(DayFilter::Day(Weekday::Mon)),
            "tuesday" => Ok(DayFilter::Day(Weekday::Tue)),
            "wednesday" => Ok(DayFilter::Day(Weekday::Wed)),
            "thursday" => Ok(DayFilter::Day(Weekday::Thu)),
            "friday" => Ok(DayFilter::Day(Weekday::Fri)),
            "saturday" => Ok(DayFilter::Day(Weekday::Sat)),
            "sunday" => Ok(DayFilter::Day(Weekday::Sun)),
            other => Err(StatsError::UnknownDay(other.to_string())),
        }
    }
}

/// Full weekday name for display (`chrono`'s `Display` prints "Mon" etc.).
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Validated filter criteria handed from the session loop into the core.
///
/// Enumerated inputs are validated at the prompt boundary; the core does
/// not re-validate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// One bicycle rental event, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRecord {
    /// Local timestamp when the trip started (source files carry no zone).
    pub start_time: NaiveDateTime,
    /// Local timestamp when the trip ended.
    pub end_time: NaiveDateTime,
    /// Trip duration in whole seconds.
    pub duration_seconds: i64,
    /// Name of the station where the trip started.
    pub start_station: String,
    /// Name of the station where the trip ended.
    pub end_station: String,
    /// Rider category, e.g. "Subscriber" or "Customer".
    pub user_type: String,
    /// Rider gender, when the city publishes it and the cell is non-empty.
    #[serde(default)]
    pub gender: Option<String>,
    /// Rider birth year, when the city publishes it and the cell is non-empty.
    #[serde(default)]
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Calendar month (1–12) derived from the start timestamp.
    pub fn month(&self) -> u32 {
        self.start_time.month()
    }

    /// Day of week derived from the start timestamp.
    pub fn weekday(&self) -> Weekday {
        self.start_time.weekday()
    }

    /// Hour of day (0–23) derived from the start timestamp.
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Which optional demographic columns a city's file carries.
///
/// Schema variation across cities is an explicit capability descriptor,
/// derived once from the CSV header row at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    /// Whether the Gender column is present.
    pub has_gender: bool,
    /// Whether the Birth Year column is present.
    pub has_birth_year: bool,
}

/// An ordered, read-only collection of trips from a single city.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    city: City,
    schema: DatasetSchema,
    records: Vec<TripRecord>,
}

impl Dataset {
    /// Assemble a dataset from loaded records. Only the `DataSource` (and
    /// tests) create datasets; everything downstream reads them.
    pub fn new(city: City, schema: DatasetSchema, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> DatasetSchema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
