//! Month and weekday narrowing of a loaded dataset.

use stats_core::models::{Dataset, DayFilter, MonthFilter, TripRecord};
use tracing::debug;

/// Narrow `dataset` to records matching the month and day criteria.
///
/// The two predicates compose by logical AND and commute. The result is a
/// new [`Dataset`] carrying the same city and schema, with the surviving
/// records in their original relative order; it may be empty. The source
/// dataset is never mutated.
pub fn apply(dataset: &Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    let records: Vec<TripRecord> = dataset
        .records()
        .iter()
        .filter(|trip| matches_month(trip, month) && matches_day(trip, day))
        .cloned()
        .collect();

    debug!(
        "Filter month={} day={}: {} of {} trips retained",
        month,
        day,
        records.len(),
        dataset.len()
    );

    Dataset::new(dataset.city(), dataset.schema(), records)
}

fn matches_month(trip: &TripRecord, month: MonthFilter) -> bool {
    match month {
        MonthFilter::All => true,
        MonthFilter::Month(m) => trip.month() == m.number(),
    }
}

fn matches_day(trip: &TripRecord, day: DayFilter) -> bool {
    match day {
        DayFilter::All => true,
        DayFilter::Day(d) => trip.weekday() == d,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Weekday};
    use stats_core::models::{City, DatasetSchema, Month};

    fn trip(start: &str, station: &str) -> TripRecord {
        TripRecord {
            start_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            end_time: NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap(),
            duration_seconds: 300,
            start_station: station.to_string(),
            end_station: "End".to_string(),
            user_type: "Subscriber".to_string(),
            gender: None,
            birth_year: None,
        }
    }

    fn dataset(records: Vec<TripRecord>) -> Dataset {
        Dataset::new(City::Chicago, DatasetSchema::default(), records)
    }

    // ── no-op and ordering ────────────────────────────────────────────────

    #[test]
    fn test_all_all_returns_equal_dataset() {
        let ds = dataset(vec![
            trip("2017-01-02 08:00:00", "A"),
            trip("2017-03-07 09:00:00", "B"),
            trip("2017-06-30 10:00:00", "C"),
        ]);
        let filtered = apply(&ds, MonthFilter::All, DayFilter::All);
        assert_eq!(filtered, ds);
    }

    #[test]
    fn test_filter_preserves_relative_order() {
        // Two January trips with a March trip between them.
        let ds = dataset(vec![
            trip("2017-01-09 08:00:00", "first"),
            trip("2017-03-07 09:00:00", "skip"),
            trip("2017-01-16 10:00:00", "second"),
        ]);
        let filtered = apply(
            &ds,
            MonthFilter::Month(Month::January),
            DayFilter::All,
        );
        let stations: Vec<&str> = filtered
            .records()
            .iter()
            .map(|t| t.start_station.as_str())
            .collect();
        assert_eq!(stations, vec!["first", "second"]);
    }

    // ── month narrowing ───────────────────────────────────────────────────

    #[test]
    fn test_month_filter_retains_only_matching_month() {
        let ds = dataset(vec![
            trip("2017-01-02 08:00:00", "jan"),
            trip("2017-03-07 09:00:00", "mar"),
            trip("2017-03-21 09:00:00", "mar2"),
        ]);
        let filtered = apply(&ds, MonthFilter::Month(Month::March), DayFilter::All);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.records().iter().all(|t| t.month() == 3));
    }

    // ── day narrowing ─────────────────────────────────────────────────────

    #[test]
    fn test_day_filter_retains_only_matching_weekday() {
        // 2017-01-02 was a Monday, 2017-01-03 a Tuesday.
        let ds = dataset(vec![
            trip("2017-01-02 08:00:00", "mon"),
            trip("2017-01-03 09:00:00", "tue"),
            trip("2017-01-09 10:00:00", "mon2"),
        ]);
        let filtered = apply(&ds, MonthFilter::All, DayFilter::Day(Weekday::Mon));
        assert_eq!(filtered.len(), 2);
        assert!(filtered
            .records()
            .iter()
            .all(|t| t.weekday() == Weekday::Mon));
    }

    // ── composition ───────────────────────────────────────────────────────

    #[test]
    fn test_filters_compose_by_and_and_commute() {
        let ds = dataset(vec![
            trip("2017-01-02 08:00:00", "jan-mon"),
            trip("2017-01-03 09:00:00", "jan-tue"),
            trip("2017-03-06 10:00:00", "mar-mon"),
        ]);

        let both = apply(
            &ds,
            MonthFilter::Month(Month::January),
            DayFilter::Day(Weekday::Mon),
        );
        assert_eq!(both.len(), 1);
        assert_eq!(both.records()[0].start_station, "jan-mon");

        // Order of narrowing does not change the result.
        let month_then_day = apply(
            &apply(&ds, MonthFilter::Month(Month::January), DayFilter::All),
            MonthFilter::All,
            DayFilter::Day(Weekday::Mon),
        );
        let day_then_month = apply(
            &apply(&ds, MonthFilter::All, DayFilter::Day(Weekday::Mon)),
            MonthFilter::Month(Month::January),
            DayFilter::All,
        );
        assert_eq!(month_then_day, both);
        assert_eq!(day_then_month, both);
    }

    #[test]
    fn test_filter_idempotent() {
        let ds = dataset(vec![
            trip("2017-01-02 08:00:00", "jan-mon"),
            trip("2017-02-14 09:00:00", "feb-tue"),
        ]);
        let month = MonthFilter::Month(Month::January);
        let day = DayFilter::Day(Weekday::Mon);

        let once = apply(&ds, month, day);
        let twice = apply(&once, month, day);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_may_return_empty() {
        let ds = dataset(vec![trip("2017-01-02 08:00:00", "jan")]);
        let filtered = apply(&ds, MonthFilter::Month(Month::June), DayFilter::All);
        assert!(filtered.is_empty());
        // City and schema carry through even when no records survive.
        assert_eq!(filtered.city(), City::Chicago);
    }
}
