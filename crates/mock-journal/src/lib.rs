//! Mock journal collaborators for testing.
//!
//! This crate provides stand-ins for the `JournalStore` and `Summarizer`
//! traits:
//! - `StaticSummarizer` - Always answers with the same text
//! - `FailingSummarizer` - Always fails with a chosen error
//! - `FailingStore` - A store whose reads and/or writes fail
//! - `DelayedStore` - Wraps another store with artificial delay
//!
//! For real persistence use the `journal-db` or `hosted-store` crates, and
//! `gemini-brain` for AI summaries.
//!
//! # Example
//!
//! ```rust
//! use mock_journal::{StaticSummarizer, Summarizer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_journal::SummarizeError> {
//!     let summarizer = StaticSummarizer::new("Entry rapi.");
//!
//!     let summary = summarizer.summarize("long BTC").await?;
//!     assert_eq!(summary, "Entry rapi.");
//!     Ok(())
//! }
//! ```

mod delayed;
mod failing;
mod summarizer;

// Re-export journal-core types for convenience
pub use journal_core::{
    async_trait, EntryDraft, EntryId, JournalEntry, JournalStore, MemoryStore, StoreError,
    SummarizeError, Summarizer,
};

pub use delayed::DelayedStore;
pub use failing::FailingStore;
pub use summarizer::{FailingSummarizer, FailureKind, StaticSummarizer};
