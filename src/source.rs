//! Backing stores for city datasets.

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::parser::parse_trips;
use crate::table::RawTable;

/// Anything that can hand back the raw rows for a named dataset.
pub trait TripSource {
    fn read(&self, dataset: &str) -> Result<RawTable>;
}

/// Reads `<data_dir>/<dataset>` as a trip CSV.
#[derive(Debug, Clone)]
pub struct CsvSource {
    data_dir: PathBuf,
}

impl CsvSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl TripSource for CsvSource {
    #[tracing::instrument(skip(self), fields(data_dir = %self.data_dir.display()))]
    fn read(&self, dataset: &str) -> Result<RawTable> {
        let path = self.data_dir.join(dataset);
        debug!(path = %path.display(), "Opening trip file");
        let file = File::open(&path)?;
        parse_trips(file)
    }
}

/// Datasets held in memory, keyed by dataset name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<String, RawTable>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(mut self, dataset: &str, table: RawTable) -> Self {
        self.tables.insert(dataset.to_string(), table);
        self
    }
}

impl TripSource for MemorySource {
    fn read(&self, dataset: &str) -> Result<RawTable> {
        self.tables
            .get(dataset)
            .cloned()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, format!("no dataset named {dataset}"))
                    .into()
            })
    }
}

impl<S: TripSource + ?Sized> TripSource for &S {
    fn read(&self, dataset: &str) -> Result<RawTable> {
        (**self).read(dataset)
    }
}
