//! SQLite persistence layer for the trading journal.
//!
//! This crate stores journal entries in a local `notes` table using SQLx with
//! SQLite, and implements [`JournalStore`](journal_core::JournalStore) so it
//! can stand in for the hosted backend.
//!
//! # Example
//!
//! ```no_run
//! use journal_core::{EntryDraft, JournalStore};
//! use journal_db::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:journal.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Record a trade
//!     let draft = EntryDraft::from_form("btc/usdt", "Breakout above range high", 60)?;
//!     db.insert(&draft).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod notes;
mod store;

pub use error::{DatabaseError, Result};
pub use models::NoteRow;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 5;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> journal_db::Result<()> {
    /// // File database
    /// let db = journal_db::Database::connect("sqlite:data/journal.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = journal_db::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        // Every connection to `sqlite::memory:` opens its own database.
        let pool_size = if url.contains(":memory:") { 1 } else { pool_size };

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_note_crud() {
        let db = test_db().await;

        // Create
        let created = notes::create_note(db.pool(), "BTC/USDT", "Breakout", "Breakout")
            .await
            .unwrap();

        // Read
        let fetched = notes::get_note(db.pool(), &created.id).await.unwrap();
        assert_eq!(fetched.title, "BTC/USDT");

        // Update
        notes::update_note(db.pool(), &created.id, "BTC/USDT", "Fakeout", "Fakeout")
            .await
            .unwrap();
        let fetched = notes::get_note(db.pool(), &created.id).await.unwrap();
        assert_eq!(fetched.content, "Fakeout");
        assert_eq!(fetched.created_at, created.created_at);

        // List
        let all = notes::list_notes(db.pool()).await.unwrap();
        assert_eq!(all.len(), 1);

        // Delete
        notes::delete_note(db.pool(), &created.id).await.unwrap();
        let result = notes::get_note(db.pool(), &created.id).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
