//! Core types and traits for the trading journal.
//!
//! This crate provides the shared interface for every journal component:
//!
//! - [`JournalEntry`] / [`EntryDraft`] - The persisted record and its writable fields
//! - [`JournalStore`] - The trait every persistence backend implements
//! - [`Summarizer`] - The trait for AI summary backends
//! - [`SessionState`] - The UI state machine as a pure reducer
//! - [`JournalController`] - Async driver that runs the reducer's effects
//!
//! # Example
//!
//! ```rust
//! use journal_core::{EntryDraft, JournalStore, MemoryStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MemoryStore::new();
//!     let draft = EntryDraft::from_form("btc/usdt", "Breakout retest", 60)?;
//!     store.insert(&draft).await?;
//!
//!     let entries = store.list().await?;
//!     assert_eq!(entries[0].title, "BTC/USDT");
//!     Ok(())
//! }
//! ```

mod controller;
mod entry;
mod error;
mod memory;
mod session;
mod store;
mod summarizer;
mod toast;

pub use controller::{ControllerConfig, DispatchReport, JournalController};
pub use entry::{
    filter_by_title, truncate_summary, EntryDraft, EntryId, JournalEntry, DEFAULT_SUMMARY_CHARS,
};
pub use error::{StoreError, SummarizeError, ValidationError};
pub use memory::MemoryStore;
pub use session::{
    Action, Effect, FormFields, Phase, SessionState, MSG_BUSY, MSG_DELETED, MSG_DELETE_FAILED,
    MSG_LOAD_FAILED, MSG_NOT_FOUND, MSG_REQUIRED, MSG_SAVED, MSG_SAVE_FAILED, MSG_UPDATED,
};
pub use store::JournalStore;
pub use summarizer::{Summarizer, SummaryMode};
pub use toast::{Toast, ToastKind, TOAST_TTL};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
