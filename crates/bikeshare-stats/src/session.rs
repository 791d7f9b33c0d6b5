//! Interactive session loop and report rendering.
//!
//! Collects validated filter criteria from the operator, drives the
//! load → filter → aggregate pipeline, and prints the four reports.
//! All session state resets on every restart.

use std::str::FromStr;

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use stats_core::error::StatsError;
use stats_core::formatting::{format_count, format_duration_secs, format_seconds_f64};
use stats_core::models::{weekday_name, City, Dataset, DayFilter, FilterCriteria, MonthFilter};
use stats_core::settings::Settings;
use stats_data::aggregator::{DurationStats, StationStats, TimeStats, UserStats};
use stats_data::{filter, reader::DataSource};

const BANNER: &str = "Hello! Let's explore some US bikeshare data!";
const RULE: &str = "----------------------------------------";

// ── Entry points ──────────────────────────────────────────────────────────────

/// Run a single non-interactive pass from command-line criteria.
///
/// The criteria strings were validated by clap's value parsers; errors
/// from the pipeline itself propagate and exit non-zero.
pub fn run_once(settings: &Settings) -> Result<()> {
    let criteria = FilterCriteria {
        city: settings.city.as_deref().unwrap_or_default().parse()?,
        month: settings.month.parse()?,
        day: settings.day.parse()?,
    };
    let source = DataSource::new(&settings.data_dir);
    run_pipeline(&source, criteria)?;
    Ok(())
}

/// Run the interactive prompt loop until the operator declines a restart
/// or closes the input stream.
pub fn run_interactive(settings: &Settings) -> Result<()> {
    println!("{}", BANNER);

    let source = DataSource::new(&settings.data_dir);
    let mut rl = DefaultEditor::new()?;

    loop {
        let Some(criteria) = prompt_criteria(&mut rl)? else {
            break;
        };
        println!("{}", RULE);

        // The pipeline can still fail on data problems (missing file,
        // malformed row, empty filtered result); report and offer a
        // restart instead of aborting the session.
        if let Err(err) = run_pipeline(&source, criteria) {
            tracing::warn!("Pipeline failed: {}", err);
            println!("Error: {}", err);
        }

        let Some(restart) = prompt_line(&mut rl, "\nWould you like to restart? Enter yes or no.\n")?
        else {
            break;
        };
        if !restart.trim().eq_ignore_ascii_case("yes") {
            break;
        }
    }

    Ok(())
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Load, filter, aggregate, and print all four reports.
fn run_pipeline(source: &DataSource, criteria: FilterCriteria) -> Result<(), StatsError> {
    tracing::info!(
        "Analyzing {} (month={}, day={})",
        criteria.city,
        criteria.month,
        criteria.day
    );

    let dataset = source.load(criteria.city)?;
    let filtered = filter::apply(&dataset, criteria.month, criteria.day);

    print_time_report(&filtered)?;
    print_station_report(&filtered)?;
    print_duration_report(&filtered);
    print_user_report(&filtered)?;

    Ok(())
}

// ── Prompting ─────────────────────────────────────────────────────────────────

/// Collect city, month, and day from the operator, re-prompting on
/// invalid input. Returns `None` when the operator closes the stream.
fn prompt_criteria(rl: &mut DefaultEditor) -> Result<Option<FilterCriteria>> {
    let Some(city) = prompt_parse::<City>(
        rl,
        "Enter the city name (chicago, new york city, washington): ",
    )?
    else {
        return Ok(None);
    };
    let Some(month) = prompt_parse::<MonthFilter>(
        rl,
        "Enter the month (all, january, february, ... , june): ",
    )?
    else {
        return Ok(None);
    };
    let Some(day) = prompt_parse::<DayFilter>(
        rl,
        "Enter the day of the week (all, monday, tuesday, ... sunday): ",
    )?
    else {
        return Ok(None);
    };
    Ok(Some(FilterCriteria { city, month, day }))
}

/// Prompt until the input parses into `T`. Returns `None` on Ctrl+C / EOF.
fn prompt_parse<T>(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<T>>
where
    T: FromStr<Err = StatsError>,
{
    loop {
        match prompt_line(rl, prompt)? {
            None => return Ok(None),
            Some(line) => match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(err) => println!("Invalid input ({}). Please try again.", err),
            },
        }
    }
}

/// One readline round-trip. Returns `None` on Ctrl+C / EOF.
fn prompt_line(rl: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn print_time_report(dataset: &Dataset) -> Result<(), StatsError> {
    println!("\nCalculating The Most Frequent Times of Travel...\n");
    let report = TimeStats::compute(dataset)?;
    println!("Most Common Month: {}", month_name(report.common_month));
    println!("Most Common Day: {}", weekday_name(report.common_day));
    println!("Most Common Start Hour: {}", report.common_start_hour);
    print_elapsed(report.elapsed);
    Ok(())
}

fn print_station_report(dataset: &Dataset) -> Result<(), StatsError> {
    println!("\nCalculating The Most Popular Stations and Trip...\n");
    let report = StationStats::compute(dataset)?;
    println!("Most Common Start Station: {}", report.common_start_station);
    println!("Most Common End Station: {}", report.common_end_station);
    println!(
        "Most Common Trip: {} to {}",
        report.common_trip.0, report.common_trip.1
    );
    print_elapsed(report.elapsed);
    Ok(())
}

fn print_duration_report(dataset: &Dataset) {
    println!("\nCalculating Trip Duration...\n");
    let report = DurationStats::compute(dataset);
    println!(
        "Total Travel Time: {} seconds ({})",
        format_count(report.total_seconds.unsigned_abs()),
        format_duration_secs(report.total_seconds)
    );
    match report.mean_seconds {
        Some(mean) => println!("Mean Travel Time: {} seconds", format_seconds_f64(mean)),
        None => println!("Mean Travel Time: n/a (no trips matched)"),
    }
    print_elapsed(report.elapsed);
}

fn print_user_report(dataset: &Dataset) -> Result<(), StatsError> {
    println!("\nCalculating User Stats...\n");
    let report = UserStats::compute(dataset)?;

    println!("User Types:");
    for (user_type, count) in &report.user_types {
        println!("  {}: {}", user_type, format_count(*count));
    }

    if let Some(genders) = &report.gender_counts {
        println!("\nGender Counts:");
        for (gender, count) in genders {
            println!("  {}: {}", gender, format_count(*count));
        }
    }

    if let Some(birth_years) = &report.birth_years {
        println!("\nEarliest Birth Year: {}", birth_years.earliest);
        println!("Most Recent Birth Year: {}", birth_years.latest);
        println!("Most Common Birth Year: {}", birth_years.most_common);
    }

    print_elapsed(report.elapsed);
    Ok(())
}

fn print_elapsed(elapsed: std::time::Duration) {
    println!("\nThis took {:.4} seconds.", elapsed.as_secs_f64());
    println!("{}", RULE);
}

/// Full name for any derived month value 1–12 (records outside the
/// filterable January–June range still display correctly).
fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
