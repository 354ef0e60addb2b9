//! Error types for sheet parsing.

use thiserror::Error;

/// Errors that can occur when loading game-data sheets.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] vanity_common::Error),

    /// Buffer length is not a whole number of records.
    #[error("invalid {sheet} size: {actual} bytes is not a multiple of {record_size}")]
    InvalidSize {
        sheet: &'static str,
        record_size: usize,
        actual: usize,
    },

    /// Two menu rows claim the same clan and gender.
    #[error("duplicate menu row for {clan} {gender}")]
    DuplicateRow {
        clan: vanity_common::Clan,
        gender: vanity_common::Gender,
    },

    /// JSON decoding error.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sheet operations.
pub type Result<T> = std::result::Result<T, Error>;
