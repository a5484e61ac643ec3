//! Month and day-of-week restrictions over enriched trips.
//!
//! # Examples
//!
//! ```
//! use bikeshare_explorer::filter::TripFilter;
//!
//! // Only Monday trips, any month
//! let filter = TripFilter::new("all", "monday");
//! assert!(filter.month.is_all());
//! ```

use crate::calendar::{DayOfWeek, Month};
use crate::catalog::{ALL, CityCatalog};
use crate::table::{Trip, TripTable};

/// One filter dimension.
///
/// A value that names no month or weekday becomes [`Selection::Nothing`], which
/// matches no trip rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
    Nothing,
}

impl<T: PartialEq> Selection<T> {
    fn from_input(input: &str, parse: impl Fn(&str) -> Option<T>) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(ALL) {
            Selection::All
        } else {
            parse(input).map_or(Selection::Nothing, Selection::Only)
        }
    }

    /// Like `from_input`, but a value missing from `allowed` is [`Selection::Nothing`]
    /// even when it names a real month or weekday.
    fn from_allowed(input: &str, allowed: &[String], parse: impl Fn(&str) -> Option<T>) -> Self {
        let input = input.trim();
        if input.eq_ignore_ascii_case(ALL) {
            return Selection::All;
        }
        if !allowed.iter().any(|v| v.eq_ignore_ascii_case(input)) {
            return Selection::Nothing;
        }
        Self::from_input(input, parse)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
            Selection::Nothing => false,
        }
    }
}

/// Conjunctive month and day filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripFilter {
    pub month: Selection<Month>,
    pub day: Selection<DayOfWeek>,
}

impl Default for TripFilter {
    fn default() -> Self {
        Self {
            month: Selection::All,
            day: Selection::All,
        }
    }
}

impl TripFilter {
    /// Builds a filter from user-facing values such as `"all"`, `"may"` or `"Friday"`.
    pub fn new(month: &str, day: &str) -> Self {
        Self {
            month: Selection::from_input(month, Month::parse),
            day: Selection::from_input(day, DayOfWeek::parse),
        }
    }

    /// Builds a filter restricted to the month and day values `catalog` offers.
    pub fn from_catalog(catalog: &CityCatalog, month: &str, day: &str) -> Self {
        Self {
            month: Selection::from_allowed(month, catalog.months(), Month::parse),
            day: Selection::from_allowed(day, catalog.days(), DayOfWeek::parse),
        }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        self.day.matches(&trip.day()) && self.month.matches(&trip.month())
    }

    /// Applies the day restriction, then the month restriction.
    pub fn apply(&self, table: TripTable) -> TripTable {
        let table = filter_day(table, self.day);
        filter_month(table, self.month)
    }
}

pub fn filter_month(table: TripTable, month: Selection<Month>) -> TripTable {
    if month.is_all() {
        return table;
    }
    table.retain(|t| month.matches(&t.month()))
}

pub fn filter_day(table: TripTable, day: Selection<DayOfWeek>) -> TripTable {
    if day.is_all() {
        return table;
    }
    table.retain(|t| day.matches(&t.day()))
}
