//! Most popular stations and trip.

use tracing::debug;

use crate::analyzers::types::{StationPair, StationStats};
use crate::analyzers::utility::mode;
use crate::error::StatError;
use crate::table::TripTable;

#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn station_stats(table: &TripTable) -> StationStats {
    let start = mode(table.iter().map(|t| t.start_station.as_str()))
        .map(|m| m.map(String::from))
        .ok_or(StatError::no_data("start station"));

    let end = mode(table.iter().map(|t| t.end_station.as_str()))
        .map(|m| m.map(String::from))
        .ok_or(StatError::no_data("end station"));

    // Pairs order by start then end station, so the headline is the first
    // of any tied pairs in that order.
    let trip = mode(
        table
            .iter()
            .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
    )
    .map(|m| {
        let (start, end) = *m.headline();
        StationPair {
            start: start.to_string(),
            end: end.to_string(),
            trips: m.count(),
        }
    })
    .ok_or(StatError::no_data("start and end station trip"));

    if let Ok(pair) = &trip {
        debug!(start = %pair.start, end = %pair.end, trips = pair.trips, "Station stats computed");
    }

    StationStats { start, end, trip }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_utils::trip_between;
    use crate::table::ColumnSet;

    #[test]
    fn test_station_stats() {
        let table = TripTable::new(
            vec![
                trip_between("Canal St", "Clark St"),
                trip_between("Canal St", "State St"),
                trip_between("Canal St", "Clark St"),
                trip_between("Wells St", "State St"),
            ],
            ColumnSet::default(),
        );

        let stats = station_stats(&table);

        let start = stats.start.unwrap();
        assert_eq!(start.headline(), "Canal St");
        assert_eq!(start.count(), 3);

        let end = stats.end.unwrap();
        assert_eq!(end.ties(), &["Clark St".to_string(), "State St".to_string()]);

        assert_eq!(
            stats.trip.unwrap(),
            StationPair {
                start: "Canal St".to_string(),
                end: "Clark St".to_string(),
                trips: 2,
            }
        );
    }

    #[test]
    fn test_station_pair_tie_takes_first_in_order() {
        let table = TripTable::new(
            vec![
                trip_between("Wells St", "Adams St"),
                trip_between("Canal St", "Wells St"),
                trip_between("Canal St", "Adams St"),
            ],
            ColumnSet::default(),
        );

        let pair = station_stats(&table).trip.unwrap();
        assert_eq!(pair.start, "Canal St");
        assert_eq!(pair.end, "Adams St");
        assert_eq!(pair.trips, 1);
    }

    #[test]
    fn test_station_stats_empty() {
        let stats = station_stats(&TripTable::default());
        assert!(stats.start.is_err());
        assert!(stats.end.is_err());
        assert_eq!(
            stats.trip,
            Err(StatError::no_data("start and end station trip"))
        );
    }
}
