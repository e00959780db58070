//! Configuration types for hosted-store.

use std::env;

use crate::error::HostedError;

/// Default table holding journal entries.
pub const DEFAULT_TABLE: &str = "notes";

/// Configuration for connecting to the hosted PostgREST backend.
#[derive(Clone)]
pub struct HostedConfig {
    /// Project URL (e.g., "https://abcd.supabase.co").
    pub base_url: String,
    /// Anonymous API key sent as `apikey` and bearer token.
    pub api_key: String,
    /// Table name.
    pub table: String,
}

impl HostedConfig {
    /// Create a new configuration for the default `notes` table.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: DEFAULT_TABLE.to_string(),
        }
    }

    /// Use a different table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `SUPABASE_URL` | Project URL | (required) |
    /// | `SUPABASE_ANON_KEY` | API key | (required) |
    /// | `SUPABASE_TABLE` | Table name | `notes` |
    pub fn from_env() -> Result<Self, HostedError> {
        let base_url = env::var("SUPABASE_URL")
            .map_err(|_| HostedError::Config("SUPABASE_URL not set".to_string()))?;
        let api_key = env::var("SUPABASE_ANON_KEY")
            .map_err(|_| HostedError::Config("SUPABASE_ANON_KEY not set".to_string()))?;
        let table = env::var("SUPABASE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());

        Ok(Self::new(base_url, api_key).with_table(table))
    }

    /// Get the table endpoint URL.
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    /// Get the URL selecting all rows, newest first.
    pub fn list_url(&self) -> String {
        format!("{}?select=*&order=created_at.desc", self.table_url())
    }

    /// Get the URL filtering a single row by id.
    pub fn row_url(&self, id: &str) -> String {
        format!("{}?id=eq.{}", self.table_url(), urlencoding::encode(id))
    }
}

impl std::fmt::Debug for HostedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("table", &self.table)
            .finish()
    }
}
