//! The JournalStore trait definition.

use async_trait::async_trait;

use crate::entry::{EntryDraft, EntryId, JournalEntry};
use crate::error::StoreError;

/// A persistence backend for journal entries.
///
/// Implementations range from the in-memory store used in tests to the
/// hosted `notes` table. This trait is object-safe and can be used with
/// `Arc<dyn JournalStore>`.
#[async_trait]
pub trait JournalStore: Send + Sync {
    /// Fetch every entry, newest first (`created_at` descending).
    async fn list(&self) -> Result<Vec<JournalEntry>, StoreError>;

    /// Insert a new entry. The store assigns `id` and `created_at`.
    async fn insert(&self, draft: &EntryDraft) -> Result<JournalEntry, StoreError>;

    /// Rewrite title, content and summary of an existing entry.
    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<(), StoreError>;

    /// Remove an entry. Removing an id that does not exist is not an error.
    async fn delete(&self, id: &EntryId) -> Result<(), StoreError>;

    /// Get a human-readable name for this backend.
    fn name(&self) -> &str;
}
