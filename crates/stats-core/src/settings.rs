use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Descriptive statistics for US bikeshare trip data
#[derive(Parser, Debug, Clone)]
#[command(
    name = "bikeshare-stats",
    about = "Explore US bikeshare trip data for Chicago, New York City and Washington",
    version
)]
pub struct Settings {
    /// City to analyze; prompts interactively when omitted
    #[arg(long, value_parser = ["chicago", "new york city", "new_york_city", "washington"])]
    pub city: Option<String>,

    /// Month filter
    #[arg(long, default_value = "all", value_parser = [
        "all", "january", "february", "march", "april", "may", "june",
    ])]
    pub month: String,

    /// Day-of-week filter
    #[arg(long, default_value = "all", value_parser = [
        "all", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
    ])]
    pub day: String,

    /// Directory containing the per-city CSV files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Logging level
    #[arg(long, default_value = "WARNING", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,
}

impl Settings {
    /// Parse settings from the process arguments.
    pub fn load() -> Self {
        Self::parse()
    }

    /// A run is non-interactive when a city was given on the command line;
    /// month and day then fall back to their `"all"` defaults.
    pub fn is_non_interactive(&self) -> bool {
        self.city.is_some()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
