//! Result types produced by the aggregation passes.

use crate::calendar::{DayOfWeek, Month};
use crate::error::StatError;

/// Outcome of a single statistic.
pub type Stat<T> = Result<T, StatError>;

/// Most frequent value(s) of a column.
///
/// Always holds at least one value. Tied values are kept in ascending order of
/// the value itself; the first one is the headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode<T> {
    pub(crate) values: Vec<T>,
    pub(crate) count: usize,
}

impl<T> Mode<T> {
    pub fn headline(&self) -> &T {
        &self.values[0]
    }

    /// Every value sharing the top frequency.
    pub fn ties(&self) -> &[T] {
        &self.values
    }

    /// Occurrences of each modal value.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_tied(&self) -> bool {
        self.values.len() > 1
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Mode<U> {
        Mode {
            values: self.values.into_iter().map(f).collect(),
            count: self.count,
        }
    }
}

/// A distinct value and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount<T> {
    pub value: T,
    pub count: usize,
}

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeStats {
    pub month: Stat<Mode<Month>>,
    pub day: Stat<Mode<DayOfWeek>>,
    pub hour: Stat<Mode<u32>>,
}

/// The most travelled start/end combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPair {
    pub start: String,
    pub end: String,
    pub trips: usize,
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStats {
    pub start: Stat<Mode<String>>,
    pub end: Stat<Mode<String>>,
    pub trip: Stat<StationPair>,
}

/// A length of time in seconds, as stored in the `Trip Duration` column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripDuration {
    pub seconds: f64,
}

/// Minutes and seconds as displayed in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationParts {
    pub minutes: i64,
    pub seconds: i64,
}

impl TripDuration {
    pub fn from_secs(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Splits into whole minutes and a remainder rounded up.
    ///
    /// The remainder is rounded independently of the minutes, so 119.5 seconds
    /// gives 1 minute and 60 seconds.
    pub fn parts(&self) -> DurationParts {
        DurationParts {
            minutes: self.seconds.div_euclid(60.0).ceil() as i64,
            seconds: self.seconds.rem_euclid(60.0).ceil() as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total: Stat<TripDuration>,
    pub average: Stat<TripDuration>,
}

/// A statistic over a column that some datasets do not have.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStat<T> {
    /// The dataset has no such column.
    Missing,
    Present(Stat<T>),
}

impl<T> ColumnStat<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, ColumnStat::Missing)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: Mode<i32>,
}

/// User type, gender and birth year breakdowns.
#[derive(Debug, Clone, PartialEq)]
pub struct UserStats {
    /// Descending by count.
    pub user_types: Stat<Vec<ValueCount<String>>>,
    pub genders: ColumnStat<Vec<ValueCount<String>>>,
    pub birth_years: ColumnStat<BirthYearStats>,
}
