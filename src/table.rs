//! In-memory trip tables: raw rows as read from a source, and enriched rows
//! with travel-time fields derived.

use serde::Deserialize;

use crate::calendar::{DayOfWeek, Month, TravelTime};

/// Optional columns a dataset may or may not carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSet {
    pub gender: bool,
    pub birth_year: bool,
}

impl ColumnSet {
    /// Both optional demographic columns present.
    pub fn full() -> Self {
        ColumnSet {
            gender: true,
            birth_year: true,
        }
    }
}

/// A single row deserialized from a city CSV file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type")]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
    /// File line the record starts on, header included; 0 when the row did
    /// not come from a file.
    #[serde(skip)]
    pub line: u64,
}

/// A dataset exactly as the source returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub trips: Vec<RawTrip>,
    pub columns: ColumnSet,
}

/// A trip with its start time reduced to hour, weekday and month.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub time: TravelTime,
    pub start_station: String,
    pub end_station: String,
    /// Seconds.
    pub trip_duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
}

impl Trip {
    pub fn hour(&self) -> u32 {
        self.time.hour
    }

    pub fn day(&self) -> DayOfWeek {
        self.time.day
    }

    pub fn month(&self) -> Month {
        self.time.month
    }
}

/// An enriched, possibly filtered, set of trips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripTable {
    trips: Vec<Trip>,
    columns: ColumnSet,
}

impl TripTable {
    pub fn new(trips: Vec<Trip>, columns: ColumnSet) -> Self {
        Self { trips, columns }
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn columns(&self) -> ColumnSet {
        self.columns
    }

    /// Keeps only the trips accepted by `keep`; column availability is unchanged.
    pub fn retain<F: FnMut(&Trip) -> bool>(mut self, keep: F) -> Self {
        self.trips.retain(keep);
        self
    }
}
