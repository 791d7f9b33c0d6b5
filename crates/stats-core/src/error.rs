use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the Bikeshare Stats core.
#[derive(Error, Debug)]
pub enum StatsError {
    /// A source file could not be opened or read from disk.
    #[error("Failed to read data file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A cell in a source row could not be parsed into its expected type
    /// (timestamp, trip duration, or birth year).
    #[error("Row {row}: invalid {field} value \"{value}\"")]
    FieldParse {
        row: u64,
        field: &'static str,
        value: String,
    },

    /// A city identifier outside the fixed supported set.
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// A month name outside the supported January–June range.
    #[error("Unknown month: {0}")]
    UnknownMonth(String),

    /// A day name that is not one of the seven weekdays.
    #[error("Unknown day of week: {0}")]
    UnknownDay(String),

    /// A required column is missing from a city's CSV header row.
    #[error("{city} data is missing required column \"{column}\"")]
    MissingColumn { city: String, column: &'static str },

    /// An aggregator was asked to compute a mode or mean over zero records.
    #[error("Cannot compute {0}: the filtered dataset is empty")]
    InsufficientData(&'static str),

    /// Pass-through for errors raised by the CSV reader.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the stats crates.
pub type Result<T> = std::result::Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = StatsError::FileRead {
            path: PathBuf::from("/data/chicago.csv"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read data file"));
        assert!(msg.contains("/data/chicago.csv"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_field_parse() {
        let err = StatsError::FieldParse {
            row: 17,
            field: "Start Time",
            value: "yesterday-ish".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Row 17: invalid Start Time value \"yesterday-ish\""
        );
    }

    #[test]
    fn test_error_display_unknown_city() {
        let err = StatsError::UnknownCity("gotham".to_string());
        assert_eq!(err.to_string(), "Unknown city: gotham");
    }

    #[test]
    fn test_error_display_missing_column() {
        let err = StatsError::MissingColumn {
            city: "washington".to_string(),
            column: "Trip Duration",
        };
        assert_eq!(
            err.to_string(),
            "washington data is missing required column \"Trip Duration\""
        );
    }

    #[test]
    fn test_error_display_insufficient_data() {
        let err = StatsError::InsufficientData("most common month");
        assert_eq!(
            err.to_string(),
            "Cannot compute most common month: the filtered dataset is empty"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StatsError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }
}
