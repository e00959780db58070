//! GeminiSummarizer implementation using the Gemini API.

use journal_core::{async_trait, SummarizeError, Summarizer};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{GenerateContentRequest, GenerateContentResponse};
use crate::config::GeminiConfig;

/// Build the analysis prompt for a trading log.
pub fn build_prompt(content: &str) -> String {
    format!(
        "Analisa singkat (maks 10 kata) trading log ini: \"{}\"",
        content
    )
}

/// A summarizer that asks Gemini for a one-line analysis.
pub struct GeminiSummarizer {
    client: Client,
    config: GeminiConfig,
}

impl GeminiSummarizer {
    /// Create a new GeminiSummarizer with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SummarizeError::Network(format!("Failed to create HTTP client: {}", e)))?;

        info!("GeminiSummarizer initialized with model: {}", config.model);

        Ok(Self { client, config })
    }

    /// Create a GeminiSummarizer from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for the variables read.
    pub fn from_env() -> Result<Self, SummarizeError> {
        Self::new(GeminiConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    async fn generate(
        &self,
        api_key: &str,
        prompt: String,
    ) -> Result<GenerateContentResponse, SummarizeError> {
        let url = self.config.endpoint();
        let request = GenerateContentRequest::prompt(prompt);

        debug!("Sending request to Gemini model {}", self.config.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizeError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummarizeError::Network(format!("Failed to read response: {}", e)))?;

        // Error bodies carry the same envelope, so parse regardless of status.
        serde_json::from_str::<GenerateContentResponse>(&body).map_err(|e| {
            SummarizeError::UnexpectedResponse(format!("HTTP {}: {}", status.as_u16(), e))
        })
    }
}

/// Pick the summary out of a Gemini response.
fn extract_summary(response: &GenerateContentResponse) -> Result<String, SummarizeError> {
    if let Some(ref error) = response.error {
        return Err(SummarizeError::Api(error.message.clone()));
    }

    match response.first_text().map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(SummarizeError::UnexpectedResponse(
            "no candidate text".to_string(),
        )),
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, content: &str) -> Result<String, SummarizeError> {
        let api_key = self
            .config
            .resolve_api_key()
            .ok_or(SummarizeError::MissingApiKey)?;

        let response = self.generate(&api_key, build_prompt(content)).await?;

        extract_summary(&response).inspect_err(|e| warn!("Gemini summary failed: {}", e))
    }

    fn name(&self) -> &str {
        "GeminiSummarizer"
    }
}

impl std::fmt::Debug for GeminiSummarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSummarizer")
            .field("config", &self.config)
            .finish()
    }
}
