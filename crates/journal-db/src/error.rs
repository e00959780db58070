//! Database error types.

use journal_core::StoreError;
use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Record not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A stored timestamp could not be parsed
    #[error("invalid timestamp for {id}: {value}")]
    InvalidTimestamp { id: String, value: String },
}

impl From<DatabaseError> for StoreError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound { id, .. } => StoreError::NotFound(id),
            err @ DatabaseError::InvalidTimestamp { .. } => StoreError::Decode(err.to_string()),
            other => StoreError::Database(other.to_string()),
        }
    }
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
