//! Error types for loading and summarizing trip data.

use thiserror::Error;

/// Failures that abort a session iteration.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The city key has no dataset in the catalog.
    #[error("unknown city: {0}")]
    UnknownSource(String),

    /// A row could not be turned into a trip record.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The catalog file could not be parsed.
    #[error("invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;

/// Outcome of a single statistic that could not be computed.
///
/// Carried inside the result structs so one empty column never prevents
/// the remaining statistics from being reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatError {
    #[error("no data available for {statistic}")]
    NoData { statistic: &'static str },
}

impl StatError {
    pub fn no_data(statistic: &'static str) -> Self {
        StatError::NoData { statistic }
    }
}
