//! Most frequent times of travel.

use tracing::debug;

use crate::analyzers::types::{Mode, Stat, TimeStats};
use crate::analyzers::utility::{mode, mode_by};
use crate::error::StatError;
use crate::table::TripTable;

#[tracing::instrument(skip_all, fields(rows = table.len()))]
pub fn time_stats(table: &TripTable) -> TimeStats {
    let stats = TimeStats {
        // tied months and weekdays are listed alphabetically by name
        month: mode_by(table.iter().map(|t| t.month()), |m| m.name())
            .ok_or(StatError::no_data("month")),
        day: mode_by(table.iter().map(|t| t.day()), |d| d.name())
            .ok_or(StatError::no_data("day of week")),
        hour: mode(table.iter().map(|t| t.hour())).ok_or(StatError::no_data("start hour")),
    };
    debug!(
        month = ?headline(&stats.month),
        day = ?headline(&stats.day),
        hour = ?headline(&stats.hour),
        "Time stats computed"
    );
    stats
}

fn headline<T: Copy>(stat: &Stat<Mode<T>>) -> Option<T> {
    stat.as_ref().ok().map(|m| *m.headline())
}
