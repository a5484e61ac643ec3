pub mod analyzers;
pub mod calendar;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod parser;
pub mod prompt;
pub mod session;
pub mod source;
pub mod table;

pub use error::{ExplorerError, Result, StatError};
