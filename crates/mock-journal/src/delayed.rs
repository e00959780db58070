//! Delayed store implementation - wraps another store with artificial delay.

use std::time::Duration;

use journal_core::{async_trait, EntryDraft, EntryId, JournalEntry, JournalStore, StoreError};
use tokio::time::sleep;

/// A store that wraps another store and delays every write.
///
/// Useful for testing overlapping submissions and simulating a slow hosted
/// backend. Reads are not delayed.
pub struct DelayedStore<S: JournalStore> {
    inner: S,
    delay: Duration,
}

impl<S: JournalStore> DelayedStore<S> {
    /// Create a new DelayedStore wrapping the given store with the specified delay.
    pub fn new(inner: S, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Create a store with a delay in milliseconds.
    pub fn with_millis(inner: S, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Get the wrapped store.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

#[async_trait]
impl<S: JournalStore> JournalStore for DelayedStore<S> {
    async fn list(&self) -> Result<Vec<JournalEntry>, StoreError> {
        self.inner.list().await
    }

    async fn insert(&self, draft: &EntryDraft) -> Result<JournalEntry, StoreError> {
        sleep(self.delay).await;
        self.inner.insert(draft).await
    }

    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<(), StoreError> {
        sleep(self.delay).await;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        sleep(self.delay).await;
        self.inner.delete(id).await
    }

    fn name(&self) -> &str {
        "DelayedStore"
    }
}
