//! CLI support for tql
//!
//! Provides programmatic access to the CSV query tool so it can be
//! embedded in other programs as well as driven from the `tql` binary.

mod load;
mod run;

pub use load::{rows_from_reader, typed_cell};
pub use run::{RunOptions, RunResult, execute_run};

use std::io;

/// Errors that can occur while running a query from the CLI
#[derive(Debug)]
pub enum CliError {
    /// Query parse error
    Parse(crate::ParseError),
    /// Row matching error
    Match(crate::MatchError),
    /// CSV decoding error
    Csv(csv::Error),
    /// IO error
    Io(io::Error),
    /// No readable data source for the query's FROM clause
    SourceNotFound(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "Parse error: {}", e),
            CliError::Match(e) => write!(f, "Match error: {}", e),
            CliError::Csv(e) => write!(f, "Invalid CSV: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::SourceNotFound(name) => {
                write!(
                    f,
                    "No data source for '{}'. Use --file or pipe CSV to stdin.",
                    name
                )
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Parse(e) => Some(e),
            CliError::Match(e) => Some(e),
            CliError::Csv(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::ParseError> for CliError {
    fn from(e: crate::ParseError) -> Self {
        CliError::Parse(e)
    }
}

impl From<crate::MatchError> for CliError {
    fn from(e: crate::MatchError) -> Self {
        CliError::Match(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Csv(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
