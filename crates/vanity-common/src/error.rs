//! Error types for vanity-common.

use thiserror::Error;

/// Common error type for Vanity operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// Clan byte outside the known range.
    #[error("unknown clan id: {0}")]
    UnknownClan(u8),

    /// Gender byte outside the known range.
    #[error("unknown gender id: {0}")]
    UnknownGender(u8),

    /// Category ordinal outside the known range.
    #[error("unknown customize index: {0}")]
    UnknownIndex(u8),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
