//! Error types for schema building.

use thiserror::Error;

use vanity_common::{Clan, Gender};

/// Errors that prevent a schema from being built.
///
/// Anomalies inside a row never surface here; they degrade to fallback
/// options instead.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No menu row exists for the requested pair.
    #[error("no menu row for {clan} {gender}")]
    MissingMenuRow { clan: Clan, gender: Gender },

    /// Clan or gender byte outside the known range.
    #[error("{0}")]
    Identity(#[from] vanity_common::Error),
}

/// Result type for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
