//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

use journal_core::{SummaryMode, DEFAULT_SUMMARY_CHARS};

/// Which backend holds the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Local SQLite file.
    Sqlite,
    /// Hosted PostgREST table.
    Hosted,
}

impl FromStr for StoreKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "hosted" | "supabase" => Ok(Self::Hosted),
            other => Err(ConfigError::InvalidStore(other.to_string())),
        }
    }
}

/// Journal web server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Journal backend.
    pub store: StoreKind,
    /// SQLite database URL (used when `store` is `Sqlite`).
    pub database_url: String,
    /// How summaries are produced on save.
    pub summary_mode: SummaryMode,
    /// Character budget for truncated summaries.
    pub summary_chars: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `JOURNAL_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `JOURNAL_STORE` | `sqlite` or `hosted` | `sqlite` |
    /// | `SQLITE_PATH` | SQLite database URL | `sqlite:journal.db?mode=rwc` |
    /// | `SUMMARY_MODE` | `truncate` or `ai` | `truncate` |
    /// | `SUMMARY_MAX_CHARS` | Truncation limit | `60` |
    ///
    /// The hosted store reads its own `SUPABASE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("JOURNAL_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let store = match env::var("JOURNAL_STORE") {
            Ok(value) => value.parse()?,
            Err(_) => StoreKind::Sqlite,
        };

        let database_url = env::var("SQLITE_PATH")
            .unwrap_or_else(|_| "sqlite:journal.db?mode=rwc".to_string());

        let summary_mode = match env::var("SUMMARY_MODE") {
            Ok(value) => value.parse().map_err(ConfigError::InvalidSummaryMode)?,
            Err(_) => SummaryMode::default(),
        };

        let summary_chars = match env::var("SUMMARY_MAX_CHARS") {
            Ok(value) => value
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|chars| *chars > 0)
                .ok_or(ConfigError::InvalidSummaryChars)?,
            Err(_) => DEFAULT_SUMMARY_CHARS,
        };

        Ok(Self {
            addr,
            store,
            database_url,
            summary_mode,
            summary_chars,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid JOURNAL_ADDR format")]
    InvalidAddr,

    #[error("Invalid JOURNAL_STORE value: {0} (expected sqlite or hosted)")]
    InvalidStore(String),

    #[error("Invalid SUMMARY_MODE: {0}")]
    InvalidSummaryMode(String),

    #[error("SUMMARY_MAX_CHARS must be a positive integer")]
    InvalidSummaryChars,
}
