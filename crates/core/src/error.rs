//! Error types for the catalog engine
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The query engine itself is total: filtering, scoring, ranking, and
//! pagination never fail for any input. The only fallible surface is the
//! record-source boundary, and callers are expected to degrade to an empty
//! store rather than crash.

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the catalog engine
#[derive(Debug, Error)]
pub enum Error {
    /// The record source is missing or unreadable
    #[error("catalog data unavailable: {reason}")]
    DataUnavailable {
        /// Human-readable description of why the source could not be read
        reason: String,
    },

    /// The record source was read but could not be parsed
    #[error("malformed record source: {0}")]
    Malformed(String),
}

impl Error {
    /// Construct a `DataUnavailable` error with the given reason
    pub fn data_unavailable(reason: impl Into<String>) -> Self {
        Error::DataUnavailable {
            reason: reason.into(),
        }
    }

    /// Fold any loader error into the data-unavailable taxonomy
    ///
    /// A malformed source and a missing source degrade to the same caller
    /// behavior (empty store), so boundaries that only care about
    /// availability can collapse the distinction.
    pub fn into_unavailable(self) -> Self {
        match self {
            Error::DataUnavailable { .. } => self,
            Error::Malformed(detail) => Error::DataUnavailable { reason: detail },
        }
    }
}
