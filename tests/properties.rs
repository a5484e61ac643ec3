//! Property-based tests for filtering and aggregation using proptest

use bikeshare_explorer::analyzers::duration_stats;
use bikeshare_explorer::analyzers::utility::mode;
use bikeshare_explorer::calendar::TravelTime;
use bikeshare_explorer::catalog::CityCatalog;
use bikeshare_explorer::filter::{TripFilter, filter_day, filter_month};
use bikeshare_explorer::table::{ColumnSet, Trip, TripTable};
use chrono::DateTime;
use proptest::prelude::*;

// Strategies for generating test data

prop_compose! {
    fn arb_trip()(
        secs in 1483228800i64..1514764800i64, // all of 2017
        duration in 0u32..100_000,
        station in prop::sample::select(vec!["A", "B", "C", "D"]),
    ) -> Trip {
        let start = DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
        Trip {
            time: TravelTime::from(start),
            start_station: station.to_string(),
            end_station: station.to_string(),
            trip_duration: duration as f64,
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        }
    }
}

prop_compose! {
    fn arb_table()(trips in prop::collection::vec(arb_trip(), 0..60)) -> TripTable {
        TripTable::new(trips, ColumnSet::default())
    }
}

fn arb_month() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "all", "january", "february", "march", "april", "may", "june", "July", "bogus",
    ])
}

fn arb_day() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "all", "monday", "Tuesday", "wednesday", "thursday", "friday", "saturday", "SUNDAY",
        "someday",
    ])
}

proptest! {
    #[test]
    fn filter_order_does_not_matter(table in arb_table(), month in arb_month(), day in arb_day()) {
        let filter = TripFilter::new(month, day);

        let month_first = filter_day(filter_month(table.clone(), filter.month), filter.day);
        let day_first = filter_month(filter_day(table.clone(), filter.day), filter.month);

        prop_assert_eq!(&month_first, &day_first);
        prop_assert_eq!(&filter.apply(table), &day_first);
    }

    #[test]
    fn filter_is_idempotent(table in arb_table(), month in arb_month(), day in arb_day()) {
        let filter = TripFilter::new(month, day);
        let once = filter.apply(table);
        let twice = filter.apply(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_all_keeps_every_row(table in arb_table()) {
        let filtered = TripFilter::new("all", "all").apply(table.clone());
        prop_assert_eq!(filtered, table);
    }

    #[test]
    fn filtered_rows_match_filter(table in arb_table(), month in arb_month(), day in arb_day()) {
        let filter = TripFilter::new(month, day);
        let filtered = filter.apply(table);
        prop_assert!(filtered.iter().all(|t| filter.matches(t)));
    }

    #[test]
    fn months_outside_catalog_keep_nothing(table in arb_table(), day in arb_day()) {
        let catalog = CityCatalog::default();
        for month in ["july", "August", "DECEMBER"] {
            let filtered = TripFilter::from_catalog(&catalog, month, day).apply(table.clone());
            prop_assert!(filtered.is_empty());
        }
    }

    #[test]
    fn mode_values_have_max_frequency(values in prop::collection::vec(0u32..8, 1..100)) {
        let mode = mode(values.iter().copied()).unwrap();
        let frequency = |v: u32| values.iter().filter(|x| **x == v).count();
        let max = (0..8).map(frequency).max().unwrap();

        prop_assert!(!mode.ties().is_empty());
        prop_assert_eq!(mode.count(), max);
        for v in mode.ties() {
            prop_assert_eq!(frequency(*v), max);
        }
        prop_assert!(mode.ties().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn total_duration_is_additive(trips in prop::collection::vec(arb_trip(), 1..60), split in 0usize..60) {
        let split = split.min(trips.len());
        let (left, right) = trips.split_at(split);

        let total = |trips: &[Trip]| {
            duration_stats(&TripTable::new(trips.to_vec(), ColumnSet::default()))
                .total
                .map(|d| d.seconds)
                .unwrap_or(0.0)
        };

        prop_assert_eq!(total(&trips), total(left) + total(right));
    }
}
