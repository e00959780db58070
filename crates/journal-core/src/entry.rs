//! Journal entry types and the pure operations on them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Default character budget for the naive truncation summary.
pub const DEFAULT_SUMMARY_CHARS: usize = 60;

/// Opaque store-assigned identifier of a journal entry.
///
/// Hosted backends may hand out numeric ids; they are kept as their decimal
/// string so every backend shares one id type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self(id.to_string()),
        })
    }
}

/// One persisted trading-log record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Store-assigned id.
    pub id: EntryId,
    /// Asset or pair, upper-cased (e.g., "BTC/USDT").
    pub title: String,
    /// Free-text strategy narrative.
    pub content: String,
    /// Short display summary derived from `content` at write time.
    pub summary: String,
    /// Store-assigned creation time; the list sort key.
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Short human date for list cards, e.g. "18 Oct 2026".
    pub fn display_date(&self) -> String {
        self.created_at.format("%-d %b %Y").to_string()
    }

    /// The writable fields of this entry.
    pub fn draft(&self) -> EntryDraft {
        EntryDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            summary: self.summary.clone(),
        }
    }
}

/// The three text fields written on insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
}

impl EntryDraft {
    /// Validate raw form input and derive the stored fields.
    ///
    /// The title is upper-cased and the summary is the naive truncation of
    /// `content` at `summary_chars` characters.
    pub fn from_form(
        title: &str,
        content: &str,
        summary_chars: usize,
    ) -> Result<Self, ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent);
        }

        Ok(Self {
            title: title.to_uppercase(),
            content: content.to_string(),
            summary: truncate_summary(content, summary_chars),
        })
    }

    /// Replace the summary, keeping title and content.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}

/// Naive truncation summary: the first `max_chars` characters plus `"..."`
/// when `content` is longer, otherwise `content` unchanged.
pub fn truncate_summary(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
        None => content.to_string(),
    }
}

/// Entries whose title contains `query`, ignoring case. An empty query
/// matches everything. Input order is preserved.
pub fn filter_by_title<'a>(entries: &'a [JournalEntry], query: &str) -> Vec<&'a JournalEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .collect()
}
