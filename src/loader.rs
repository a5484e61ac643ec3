//! Turns a city key and filter values into an enriched, filtered trip table.

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::calendar::TravelTime;
use crate::catalog::CityCatalog;
use crate::error::{ExplorerError, Result};
use crate::filter::TripFilter;
use crate::source::TripSource;
use crate::table::{RawTable, RawTrip, Trip, TripTable};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Loads city datasets through a [`TripSource`] using the cities a
/// [`CityCatalog`] knows about.
pub struct DatasetLoader<'a, S> {
    catalog: &'a CityCatalog,
    source: S,
}

impl<'a, S: TripSource> DatasetLoader<'a, S> {
    pub fn new(catalog: &'a CityCatalog, source: S) -> Self {
        Self { catalog, source }
    }

    /// Reads the dataset for `city`, derives hour, weekday and month for
    /// every row, then keeps the rows matching `day` and `month`.
    ///
    /// Filter values outside the catalog's month/day lists produce an empty
    /// table, including real months the catalog does not offer.
    ///
    /// # Errors
    ///
    /// [`ExplorerError::UnknownSource`] if the catalog has no such city,
    /// [`ExplorerError::MalformedRecord`] if a start time cannot be parsed,
    /// and any error from the underlying source.
    #[tracing::instrument(skip(self))]
    pub fn load(&self, city: &str, month: &str, day: &str) -> Result<TripTable> {
        let dataset = self.catalog.resolve(city)?;
        let raw = self.source.read(dataset)?;
        let loaded = raw.trips.len();

        let table = TripFilter::from_catalog(self.catalog, month, day).apply(enrich(raw)?);

        info!(dataset, loaded, kept = table.len(), "Dataset loaded");
        Ok(table)
    }
}

/// Derives travel-time fields for every row. Never drops rows.
pub fn enrich(raw: RawTable) -> Result<TripTable> {
    let trips = raw
        .trips
        .into_iter()
        .map(enrich_trip)
        .collect::<Result<Vec<_>>>()?;

    debug!(rows = trips.len(), "Enriched trips");
    Ok(TripTable::new(trips, raw.columns))
}

fn enrich_trip(row: RawTrip) -> Result<Trip> {
    let start = NaiveDateTime::parse_from_str(&row.start_time, TIMESTAMP_FORMAT).map_err(|e| {
        ExplorerError::MalformedRecord {
            line: row.line,
            reason: format!("invalid start time `{}`: {e}", row.start_time),
        }
    })?;

    Ok(Trip {
        time: TravelTime::from(start),
        start_station: row.start_station,
        end_station: row.end_station,
        trip_duration: row.trip_duration,
        user_type: row.user_type,
        gender: row.gender,
        birth_year: row.birth_year,
    })
}
