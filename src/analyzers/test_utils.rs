//! Trip builders shared by the analyzer tests.

use chrono::NaiveDateTime;

use crate::calendar::TravelTime;
use crate::table::Trip;

const DEFAULT_START: &str = "2017-01-02 12:00:00";

fn base(start: &str) -> Trip {
    let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%d %H:%M:%S").unwrap();
    Trip {
        time: TravelTime::from(start),
        start_station: "Start".to_string(),
        end_station: "End".to_string(),
        trip_duration: 60.0,
        user_type: Some("Subscriber".to_string()),
        gender: None,
        birth_year: None,
    }
}

pub fn trip_at(start: &str) -> Trip {
    base(start)
}

pub fn trip_between(start: &str, end: &str) -> Trip {
    Trip {
        start_station: start.to_string(),
        end_station: end.to_string(),
        ..base(DEFAULT_START)
    }
}

pub fn trip_lasting(seconds: f64) -> Trip {
    Trip {
        trip_duration: seconds,
        ..base(DEFAULT_START)
    }
}

pub fn rider(user_type: Option<&str>, gender: Option<&str>, birth_year: Option<f64>) -> Trip {
    Trip {
        user_type: user_type.map(String::from),
        gender: gender.map(String::from),
        birth_year,
        ..base(DEFAULT_START)
    }
}
