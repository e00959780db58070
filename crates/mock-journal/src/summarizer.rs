//! Canned summarizers.

use std::sync::atomic::{AtomicUsize, Ordering};

use journal_core::{async_trait, SummarizeError, Summarizer};

/// A summarizer that always returns the same text.
///
/// Counts calls so tests can assert whether the provider was reached.
#[derive(Debug, Default)]
pub struct StaticSummarizer {
    reply: String,
    calls: AtomicUsize,
}

impl StaticSummarizer {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `summarize` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for StaticSummarizer {
    async fn summarize(&self, _content: &str) -> Result<String, SummarizeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.trim().to_string())
    }

    fn name(&self) -> &str {
        "StaticSummarizer"
    }
}

/// Which error a [`FailingSummarizer`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingApiKey,
    Network,
    Api,
    UnexpectedResponse,
}

/// A summarizer that always fails.
#[derive(Debug)]
pub struct FailingSummarizer {
    kind: FailureKind,
}

impl FailingSummarizer {
    pub fn new(kind: FailureKind) -> Self {
        Self { kind }
    }

    /// Fails as if no API key were configured.
    pub fn missing_key() -> Self {
        Self::new(FailureKind::MissingApiKey)
    }

    /// Fails as if the provider rejected the request.
    pub fn api_error() -> Self {
        Self::new(FailureKind::Api)
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn summarize(&self, _content: &str) -> Result<String, SummarizeError> {
        Err(match self.kind {
            FailureKind::MissingApiKey => SummarizeError::MissingApiKey,
            FailureKind::Network => SummarizeError::Network("connection refused".to_string()),
            FailureKind::Api => SummarizeError::Api("Resource has been exhausted".to_string()),
            FailureKind::UnexpectedResponse => {
                SummarizeError::UnexpectedResponse("no candidate text".to_string())
            }
        })
    }

    fn name(&self) -> &str {
        "FailingSummarizer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_reply_and_calls() {
        let summarizer = StaticSummarizer::new(" Setup valid. ");

        assert_eq!(summarizer.summarize("a").await.unwrap(), "Setup valid.");
        assert_eq!(summarizer.summarize("b").await.unwrap(), "Setup valid.");
        assert_eq!(summarizer.calls(), 2);
    }

    #[tokio::test]
    async fn test_failing_kinds() {
        assert!(matches!(
            FailingSummarizer::missing_key().summarize("x").await,
            Err(SummarizeError::MissingApiKey)
        ));
        assert!(matches!(
            FailingSummarizer::api_error().summarize("x").await,
            Err(SummarizeError::Api(_))
        ));
        assert!(matches!(
            FailingSummarizer::new(FailureKind::Network).summarize("x").await,
            Err(SummarizeError::Network(_))
        ));
    }

    #[test]
    fn test_names() {
        assert_eq!(StaticSummarizer::new("x").name(), "StaticSummarizer");
        assert_eq!(FailingSummarizer::missing_key().name(), "FailingSummarizer");
    }
}
