//! Supported cities and the filter vocabulary offered to the user.
//!
//! The city map is stored as a plain JSON object when loaded from disk:
//! ```json
//! {
//!   "chicago": "chicago.csv",
//!   "new york city": "new_york_city.csv"
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ExplorerError, Result};

/// Filter value that disables a month or day restriction.
pub const ALL: &str = "all";

const DEFAULT_CITIES: [(&str, &str); 3] = [
    ("chicago", "chicago.csv"),
    ("new york city", "new_york_city.csv"),
    ("washington", "washington.csv"),
];

const DEFAULT_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

const DEFAULT_DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Immutable lookup of city keys to dataset names, plus the accepted
/// month and day filter values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityCatalog {
    cities: BTreeMap<String, String>,
    months: Vec<String>,
    days: Vec<String>,
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::from_cities(
            DEFAULT_CITIES
                .iter()
                .map(|(city, file)| (city.to_string(), file.to_string())),
        )
    }
}

impl CityCatalog {
    /// Catalog over the given cities with the default month and day vocabulary.
    /// City keys are stored lowercase.
    pub fn from_cities<I>(cities: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            cities: cities
                .into_iter()
                .map(|(city, file)| (city.trim().to_lowercase(), file))
                .collect(),
            months: DEFAULT_MONTHS.iter().map(|m| m.to_string()).collect(),
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Loads the city map from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let cities: BTreeMap<String, String> = serde_json::from_str(content)?;
        Ok(Self::from_cities(cities))
    }

    /// Returns the dataset backing `city`.
    pub fn resolve(&self, city: &str) -> Result<&str> {
        self.cities
            .get(&normalize(city))
            .map(String::as_str)
            .ok_or_else(|| ExplorerError::UnknownSource(city.to_string()))
    }

    /// Iterates over city keys in sorted order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn validate_city(&self, input: &str) -> bool {
        self.cities.contains_key(&normalize(input))
    }

    /// Accepts `"all"` or one of the catalog's month names.
    pub fn validate_month(&self, input: &str) -> bool {
        is_all_or_member(input, &self.months)
    }

    /// Accepts `"all"` or one of the catalog's weekday names.
    pub fn validate_day(&self, input: &str) -> bool {
        is_all_or_member(input, &self.days)
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn is_all_or_member(input: &str, allowed: &[String]) -> bool {
    let input = normalize(input);
    input == ALL || allowed.iter().any(|v| *v == input)
}
