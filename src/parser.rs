//! CSV parser for city trip files.

use std::io::Read;

use tracing::debug;

use crate::error::{ExplorerError, Result};
use crate::table::{ColumnSet, RawTable, RawTrip};

const REQUIRED_HEADERS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Start Station",
    "End Station",
    "Trip Duration",
    "User Type",
];

/// Decodes every row of a trip CSV into a [`RawTable`].
///
/// Columns beyond the known ones (such as an unnamed leading index) are
/// ignored. `Gender` and `Birth Year` are optional; their presence is
/// recorded in the table's [`ColumnSet`].
///
/// # Errors
///
/// Returns [`ExplorerError::MalformedRecord`] if a required header is missing
/// or a row holds a non-numeric duration or birth year.
pub fn parse_trips<R: Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let has = |name: &str| headers.iter().any(|h| h == name);

    if let Some(missing) = REQUIRED_HEADERS.into_iter().find(|h| !has(*h)) {
        return Err(ExplorerError::MalformedRecord {
            line: 1,
            reason: format!("missing column `{missing}`"),
        });
    }

    let columns = ColumnSet {
        gender: has("Gender"),
        birth_year: has("Birth Year"),
    };

    let mut trips = Vec::new();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record).map_err(malformed)? {
        let line = record.position().map_or(0, |pos| pos.line());
        let mut trip: RawTrip =
            record
                .deserialize(Some(&headers))
                .map_err(|e| ExplorerError::MalformedRecord {
                    line,
                    reason: e.to_string(),
                })?;
        trip.line = line;
        trips.push(trip);
    }

    debug!(rows = trips.len(), ?columns, "Parsed trip rows");
    Ok(RawTable { trips, columns })
}

fn malformed(err: csv::Error) -> ExplorerError {
    match err.position() {
        Some(pos) => ExplorerError::MalformedRecord {
            line: pos.line(),
            reason: err.to_string(),
        },
        None => ExplorerError::Csv(err),
    }
}
