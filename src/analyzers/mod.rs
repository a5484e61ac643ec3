//! Descriptive statistics over an enriched trip table.
//!
//! Four independent passes (travel times, stations, durations, users) each
//! read the table without modifying it. A statistic that has nothing to
//! summarize comes back as [`StatError::NoData`](crate::error::StatError)
//! while the others are still computed.

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod users;
pub mod utility;

#[cfg(test)]
mod test_utils;

pub use duration::duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use users::user_stats;
