//! A store that fails on demand.

use std::sync::atomic::{AtomicBool, Ordering};

use journal_core::{
    async_trait, EntryDraft, EntryId, JournalEntry, JournalStore, MemoryStore, StoreError,
};

/// A [`MemoryStore`] whose reads and writes can be switched to fail.
///
/// Failures are reported as a 503 backend error, the way an unavailable
/// hosted table answers.
#[derive(Debug, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl FailingStore {
    /// A store where every operation fails.
    pub fn new() -> Self {
        let store = Self::default();
        store.set_fail_reads(true);
        store.set_fail_writes(true);
        store
    }

    /// A store where only insert, update and delete fail.
    pub fn writes_only() -> Self {
        let store = Self::default();
        store.set_fail_writes(true);
        store
    }

    /// A store that accepts writes but fails every list.
    pub fn reads_only() -> Self {
        let store = Self::default();
        store.set_fail_reads(true);
        store
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), StoreError> {
        if flag.load(Ordering::SeqCst) {
            return Err(StoreError::Backend {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl JournalStore for FailingStore {
    async fn list(&self) -> Result<Vec<JournalEntry>, StoreError> {
        self.check(&self.fail_reads)?;
        self.inner.list().await
    }

    async fn insert(&self, draft: &EntryDraft) -> Result<JournalEntry, StoreError> {
        self.check(&self.fail_writes)?;
        self.inner.insert(draft).await
    }

    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<(), StoreError> {
        self.check(&self.fail_writes)?;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        self.check(&self.fail_writes)?;
        self.inner.delete(id).await
    }

    fn name(&self) -> &str {
        "FailingStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft::from_form("eth", "range fade", 60).unwrap()
    }

    #[tokio::test]
    async fn test_everything_fails() {
        let store = FailingStore::new();

        assert!(matches!(
            store.list().await,
            Err(StoreError::Backend { status: 503, .. })
        ));
        assert!(store.insert(&draft()).await.is_err());
        assert!(store.delete(&EntryId::from("1")).await.is_err());
    }

    #[tokio::test]
    async fn test_writes_only_still_lists() {
        let store = FailingStore::writes_only();

        assert!(store.insert(&draft()).await.is_err());
        assert!(store.list().await.unwrap().is_empty());

        store.set_fail_writes(false);
        store.insert(&draft()).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reads_only_still_writes() {
        let store = FailingStore::reads_only();

        store.insert(&draft()).await.unwrap();
        assert!(store.list().await.is_err());
        assert_eq!(store.inner.len().await, 1);
    }
}
