//! Error type shared by every solver.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The puzzle input (or a single query value) is malformed or out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A spreadsheet row has no pair of values where one divides the other.
    #[error("row {row} has no evenly divisible pair")]
    NoDivisiblePair { row: usize },

    #[error("no solver for day {0}")]
    UnknownDay(u8),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
