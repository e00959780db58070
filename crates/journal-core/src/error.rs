//! Error types shared by journal components.

use thiserror::Error;

/// A journal form failed client-side validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The asset/pair title was empty after trimming.
    #[error("title cannot be empty")]
    EmptyTitle,

    /// The strategy content was empty after trimming.
    #[error("content cannot be empty")]
    EmptyContent,
}

/// Errors reported by a [`JournalStore`](crate::JournalStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No entry with the given id exists.
    #[error("entry not found: {0}")]
    NotFound(String),

    /// The backend answered with an error status.
    #[error("backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// The backend could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a payload we could not decode.
    #[error("decode error: {0}")]
    Decode(String),

    /// Embedded database failure.
    #[error("database error: {0}")]
    Database(String),
}

/// Errors that can occur while producing an AI summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// No API key is configured.
    #[error("API key not configured")]
    MissingApiKey,

    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(String),

    /// The provider returned an error payload.
    #[error("API error: {0}")]
    Api(String),

    /// The provider answered with something other than a candidate text.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
