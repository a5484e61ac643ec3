//! Total and average trip duration.

use tracing::debug;

use crate::analyzers::types::{DurationStats, TripDuration};
use crate::analyzers::utility::mean;
use crate::error::StatError;
use crate::table::TripTable;

#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table.iter().map(|t| t.trip_duration).collect();

    let total = if durations.is_empty() {
        Err(StatError::no_data("total travel time"))
    } else {
        Ok(TripDuration::from_secs(durations.iter().sum()))
    };

    let average = mean(&durations)
        .map(TripDuration::from_secs)
        .ok_or(StatError::no_data("average travel time"));

    debug!(?total, ?average, "Duration stats computed");
    DurationStats { total, average }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_utils::trip_lasting;
    use crate::analyzers::types::DurationParts;
    use crate::table::ColumnSet;

    #[test]
    fn test_duration_stats() {
        let table = TripTable::new(
            vec![trip_lasting(100.0), trip_lasting(25.0), trip_lasting(240.0)],
            ColumnSet::default(),
        );

        let stats = duration_stats(&table);

        let total = stats.total.unwrap();
        assert_eq!(total.seconds, 365.0);
        assert_eq!(total.parts(), DurationParts { minutes: 6, seconds: 5 });

        let average = stats.average.unwrap();
        assert!((average.seconds - 121.666_666).abs() < 1e-3);
        assert_eq!(average.parts(), DurationParts { minutes: 2, seconds: 2 });
    }

    #[test]
    fn test_duration_stats_empty() {
        let stats = duration_stats(&TripTable::default());
        assert_eq!(stats.total, Err(StatError::no_data("total travel time")));
        assert_eq!(stats.average, Err(StatError::no_data("average travel time")));
    }
}
