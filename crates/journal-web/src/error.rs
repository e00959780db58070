//! Error types for the journal web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use journal_core::{
    DispatchReport, MSG_BUSY, MSG_DELETE_FAILED, MSG_LOAD_FAILED, MSG_NOT_FOUND, MSG_REQUIRED,
    MSG_SAVE_FAILED,
};
use thiserror::Error;

/// Errors that can occur in the journal web interface.
#[derive(Debug, Error)]
pub enum WebError {
    /// Form input failed validation.
    #[error("{0}")]
    Validation(String),

    /// No such entry.
    #[error("{0}")]
    NotFound(String),

    /// Another write is still in flight.
    #[error("{0}")]
    Busy(String),

    /// The store rejected or failed the operation.
    #[error("{0}")]
    Store(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WebError {
    /// Turn the toast a controller action raised into an error, if the toast
    /// reports one.
    pub fn from_report(report: &DispatchReport) -> Option<Self> {
        let message = report.toast.as_ref()?.message.as_str();
        let error = match message {
            MSG_REQUIRED => WebError::Validation(message.to_string()),
            MSG_NOT_FOUND => WebError::NotFound(message.to_string()),
            MSG_BUSY => WebError::Busy(message.to_string()),
            MSG_SAVE_FAILED | MSG_DELETE_FAILED | MSG_LOAD_FAILED => {
                WebError::Store(message.to_string())
            }
            _ => return None,
        };
        Some(error)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            WebError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            WebError::Busy(msg) => (StatusCode::CONFLICT, msg.clone()),
            WebError::Store(msg) => {
                tracing::error!("Store error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            WebError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for web handlers.
pub type Result<T> = std::result::Result<T, WebError>;
