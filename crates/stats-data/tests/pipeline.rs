//! End-to-end pipeline tests: CSV on disk → load → filter → aggregate.

use std::io::Write;
use std::path::Path;

use stats_core::models::{City, DayFilter, MonthFilter};
use stats_data::aggregator::{DurationStats, StationStats, TimeStats, UserStats};
use stats_data::reader::DataSource;
use stats_data::filter;
use tempfile::TempDir;

const HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

fn write_city(dir: &Path, file_name: &str, rows: &[&str]) {
    let mut file = std::fs::File::create(dir.join(file_name)).unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
}

#[test]
fn filter_by_march_retains_only_march_trips() {
    let dir = TempDir::new().unwrap();
    write_city(
        dir.path(),
        "chicago.csv",
        &[
            "0,2017-01-02 08:00:00,2017-01-02 08:05:00,300,A,B,Subscriber,,",
            "1,2017-03-07 09:00:00,2017-03-07 09:10:00,600,C,D,Subscriber,,",
            "2,2017-03-14 10:00:00,2017-03-14 10:02:00,120,E,F,Customer,,",
        ],
    );

    let dataset = DataSource::new(dir.path()).load(City::Chicago).unwrap();
    let filtered = filter::apply(
        &dataset,
        "march".parse::<MonthFilter>().unwrap(),
        DayFilter::All,
    );

    assert_eq!(filtered.len(), 2);
    assert!(filtered.records().iter().all(|t| t.month() == 3));
}

#[test]
fn aggregators_match_worked_examples() {
    let dir = TempDir::new().unwrap();
    // Durations 100/200/300; start stations A, A, B.
    write_city(
        dir.path(),
        "new_york_city.csv",
        &[
            "0,2017-06-05 08:00:00,2017-06-05 08:01:40,100,A,X,Subscriber,Male,1990",
            "1,2017-06-05 09:00:00,2017-06-05 09:03:20,200,A,X,Subscriber,Female,1990",
            "2,2017-06-06 08:00:00,2017-06-06 08:05:00,300,B,Y,Customer,Male,1985",
        ],
    );

    let dataset = DataSource::new(dir.path()).load(City::NewYorkCity).unwrap();
    let all = filter::apply(&dataset, MonthFilter::All, DayFilter::All);
    assert_eq!(all.records(), dataset.records());

    let durations = DurationStats::compute(&all);
    assert_eq!(durations.total_seconds, 600);
    assert_eq!(durations.mean_seconds, Some(200.0));

    let stations = StationStats::compute(&all).unwrap();
    assert_eq!(stations.common_start_station, "A");
    assert_eq!(stations.common_trip, ("A".to_string(), "X".to_string()));

    let times = TimeStats::compute(&all).unwrap();
    assert_eq!(times.common_month, 6);
    assert_eq!(times.common_start_hour, 8);

    let users = UserStats::compute(&all).unwrap();
    assert_eq!(users.user_types[0], ("Subscriber".to_string(), 2));
    let birth_years = users.birth_years.unwrap();
    assert_eq!(birth_years.earliest, 1985);
    assert_eq!(birth_years.latest, 1990);
    assert_eq!(birth_years.most_common, 1990);
}

#[test]
fn washington_schema_omits_demographics() {
    let dir = TempDir::new().unwrap();
    let mut file = std::fs::File::create(dir.path().join("washington.csv")).unwrap();
    writeln!(
        file,
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type"
    )
    .unwrap();
    writeln!(
        file,
        "0,2017-02-01 12:00:00,2017-02-01 12:30:00,1800,K St,M St,Registered"
    )
    .unwrap();

    let dataset = DataSource::new(dir.path()).load(City::Washington).unwrap();
    let report = UserStats::compute(&dataset).unwrap();

    assert_eq!(report.user_types, vec![("Registered".to_string(), 1)]);
    assert_eq!(report.gender_counts, None);
    assert_eq!(report.birth_years, None);
}
