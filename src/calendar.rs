//! Month and weekday vocabulary derived from trip start times.
//!
//! Both enums order in calendar order (weeks start on Monday).

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Title-cased English name, e.g. `"March"`.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Case-insensitive lookup by full name.
    pub fn parse(name: &str) -> Option<Month> {
        let name = name.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    pub fn parse(name: &str) -> Option<DayOfWeek> {
        let name = name.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        DayOfWeek::ALL[day.num_days_from_monday() as usize]
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// The three travel-time fields derived from a start timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelTime {
    pub hour: u32,
    pub day: DayOfWeek,
    pub month: Month,
}

impl From<NaiveDateTime> for TravelTime {
    fn from(start: NaiveDateTime) -> Self {
        TravelTime {
            hour: start.hour(),
            day: start.weekday().into(),
            // chrono months are always 1..=12
            month: Month::ALL[start.month0() as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_parse_is_case_insensitive() {
        assert_eq!(Month::parse("june"), Some(Month::June));
        assert_eq!(Month::parse("JUNE"), Some(Month::June));
        assert_eq!(Month::parse(" March "), Some(Month::March));
        assert_eq!(Month::parse("jun"), None);
    }

    #[test]
    fn test_day_order_starts_on_monday() {
        assert!(DayOfWeek::Monday < DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from(chrono::Weekday::Sun), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from(chrono::Weekday::Mon), DayOfWeek::Monday);
    }

    #[test]
    fn test_travel_time_from_timestamp() {
        // 2017-06-23 was a Friday
        let start = NaiveDate::from_ymd_opt(2017, 6, 23)
            .unwrap()
            .and_hms_opt(15, 9, 32)
            .unwrap();
        let time = TravelTime::from(start);

        assert_eq!(time.hour, 15);
        assert_eq!(time.day, DayOfWeek::Friday);
        assert_eq!(time.month, Month::June);
        assert_eq!(time.day.to_string(), "Friday");
        assert_eq!(time.month.to_string(), "June");
    }
}
