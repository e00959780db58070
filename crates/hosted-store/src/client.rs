//! PostgREST client for the hosted `notes` table.

use async_trait::async_trait;
use journal_core::{EntryDraft, EntryId, JournalEntry, JournalStore, StoreError};
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::config::HostedConfig;
use crate::error::HostedError;

/// PostgREST error body.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    details: Option<String>,
}

/// Client for the hosted journal table.
#[derive(Clone)]
pub struct HostedStore {
    http: Client,
    config: HostedConfig,
}

impl HostedStore {
    /// Create a client. No request is made until the first operation.
    pub fn new(config: HostedConfig) -> Result<Self, HostedError> {
        let http = Client::builder().build().map_err(HostedError::Http)?;

        tracing::info!(
            "HostedStore configured for {} (table: {})",
            config.base_url,
            config.table
        );

        Ok(Self { http, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`HostedConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, HostedError> {
        Self::new(HostedConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &HostedConfig {
        &self.config
    }

    /// Fetch all rows, newest first.
    pub async fn fetch_all(&self) -> Result<Vec<JournalEntry>, HostedError> {
        let url = self.config.list_url();
        debug!("GET {}", url);

        let response = self.authorized(self.http.get(&url)).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }

    /// Insert one row and return it as stored.
    pub async fn insert_row(&self, draft: &EntryDraft) -> Result<JournalEntry, HostedError> {
        let url = self.config.table_url();
        debug!("POST {}", url);

        let response = self
            .authorized(self.http.post(&url))
            .header("Prefer", "return=representation")
            .json(&[draft])
            .send()
            .await?;
        let response = check_status(response).await?;

        let mut rows: Vec<JournalEntry> = response.json().await?;
        if rows.is_empty() {
            return Err(HostedError::EmptyResponse);
        }
        Ok(rows.swap_remove(0))
    }

    /// Rewrite the text fields of the row with `id`.
    pub async fn update_row(&self, id: &str, draft: &EntryDraft) -> Result<(), HostedError> {
        let url = self.config.row_url(id);
        debug!("PATCH {}", url);

        let response = self
            .authorized(self.http.patch(&url))
            .header("Prefer", "return=minimal")
            .json(draft)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Delete the row with `id`.
    pub async fn delete_row(&self, id: &str) -> Result<(), HostedError> {
        let url = self.config.row_url(id);
        debug!("DELETE {}", url);

        let response = self.authorized(self.http.delete(&url)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.config.api_key)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
    }
}

/// Turn a non-2xx response into [`HostedError::Api`].
async fn check_status(response: Response) -> Result<Response, HostedError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<PostgrestError>(&body) {
        Ok(err) => match err.details {
            Some(details) => format!("{} ({})", err.message, details),
            None => err.message,
        },
        Err(_) => body,
    };

    Err(HostedError::Api {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl JournalStore for HostedStore {
    async fn list(&self) -> Result<Vec<JournalEntry>, StoreError> {
        Ok(self.fetch_all().await?)
    }

    async fn insert(&self, draft: &EntryDraft) -> Result<JournalEntry, StoreError> {
        Ok(self.insert_row(draft).await?)
    }

    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<(), StoreError> {
        Ok(self.update_row(id.as_str(), draft).await?)
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        Ok(self.delete_row(id.as_str()).await?)
    }

    fn name(&self) -> &str {
        "HostedStore"
    }
}

impl std::fmt::Debug for HostedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedStore")
            .field("config", &self.config)
            .finish()
    }
}
