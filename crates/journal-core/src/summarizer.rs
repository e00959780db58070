//! The Summarizer trait and the summary wiring choice.

use std::str::FromStr;

use async_trait::async_trait;

use crate::error::SummarizeError;

/// A backend that turns journal text into a short summary.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `content`. The returned text is already trimmed.
    async fn summarize(&self, content: &str) -> Result<String, SummarizeError>;

    /// Get a human-readable name for this summarizer.
    fn name(&self) -> &str;
}

/// How the stored `summary` of an entry is produced on save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SummaryMode {
    /// Naive character truncation of the content.
    #[default]
    Truncate,
    /// Ask the configured [`Summarizer`], falling back to truncation.
    Ai,
}

impl FromStr for SummaryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "truncate" | "naive" => Ok(Self::Truncate),
            "ai" => Ok(Self::Ai),
            other => Err(format!("unknown summary mode: {}", other)),
        }
    }
}
