//! Error types for hosted-store.

use journal_core::StoreError;
use thiserror::Error;

/// Errors that can occur when talking to the hosted backend.
#[derive(Debug, Error)]
pub enum HostedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an error status.
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// An insert returned no row.
    #[error("insert returned no row")]
    EmptyResponse,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<HostedError> for StoreError {
    fn from(err: HostedError) -> Self {
        match err {
            HostedError::Http(e) if e.is_decode() => StoreError::Decode(e.to_string()),
            HostedError::Http(e) => StoreError::Transport(e.to_string()),
            HostedError::Api { status, message } => StoreError::Backend { status, message },
            HostedError::EmptyResponse => StoreError::Decode("insert returned no row".to_string()),
            HostedError::Config(msg) => StoreError::Transport(msg),
        }
    }
}
