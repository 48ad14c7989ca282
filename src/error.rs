// File: src/error.rs
use thiserror::Error;

/// Failure categories reported by the finder core. All of them are
/// deterministic for a given input, so none is worth retrying.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The input is not an 11-character digit-string. The offending entry is
    /// carried so the host can report or skip it.
    #[error("not a valid phone number: {0:?}")]
    InvalidPhoneNumber(String),

    /// The dictionary oracle could not answer. Fatal to the in-progress
    /// decode; no partial solution set is returned.
    #[error("dictionary unavailable: {0}")]
    DictionaryUnavailable(String),

    /// The matcher was handed a query that would match everything.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
