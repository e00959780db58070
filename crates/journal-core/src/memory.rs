//! In-process journal store.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::entry::{EntryDraft, EntryId, JournalEntry};
use crate::error::StoreError;
use crate::store::JournalStore;

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    last_created: Option<DateTime<Utc>>,
    entries: Vec<JournalEntry>,
}

/// A [`JournalStore`] that keeps entries in memory.
///
/// Ids are sequential integers and `created_at` is strictly increasing, so
/// entries inserted within the same clock tick still have a defined order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl JournalStore for MemoryStore {
    async fn list(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let inner = self.inner.lock().await;
        // Insertion order is creation order; newest first.
        Ok(inner.entries.iter().rev().cloned().collect())
    }

    async fn insert(&self, draft: &EntryDraft) -> Result<JournalEntry, StoreError> {
        let mut inner = self.inner.lock().await;

        inner.next_id += 1;
        let mut created_at = Utc::now();
        if let Some(last) = inner.last_created {
            if created_at <= last {
                created_at = last + Duration::microseconds(1);
            }
        }
        inner.last_created = Some(created_at);

        let entry = JournalEntry {
            id: EntryId::new(inner.next_id.to_string()),
            title: draft.title.clone(),
            content: draft.content.clone(),
            summary: draft.summary.clone(),
            created_at,
        };
        inner.entries.push(entry.clone());

        Ok(entry)
    }

    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        let entry = inner
            .entries
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        entry.title = draft.title.clone();
        entry.content = draft.content.clone();
        entry.summary = draft.summary.clone();
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().await;
        inner.entries.retain(|entry| &entry.id != id);
        Ok(())
    }

    fn name(&self) -> &str {
        "MemoryStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> EntryDraft {
        EntryDraft::from_form(title, "some strategy", 60).unwrap()
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let store = MemoryStore::new();
        store.insert(&draft("first")).await.unwrap();
        store.insert(&draft("second")).await.unwrap();
        store.insert(&draft("third")).await.unwrap();

        let entries = store.list().await.unwrap();
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["THIRD", "SECOND", "FIRST"]);
        assert!(entries[0].created_at > entries[1].created_at);
        assert!(entries[1].created_at > entries[2].created_at);
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_timestamp() {
        let store = MemoryStore::new();
        let created = store.insert(&draft("eth")).await.unwrap();

        let new_draft = EntryDraft::from_form("eth", "changed plan", 60).unwrap();
        store.update(&created.id, &new_draft).await.unwrap();

        let entries = store.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, created.id);
        assert_eq!(entries[0].created_at, created.created_at);
        assert_eq!(entries[0].content, "changed plan");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryStore::new();
        let result = store.update(&EntryId::from("404"), &draft("x")).await;
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let store = MemoryStore::new();
        store.insert(&draft("keep")).await.unwrap();

        store.delete(&EntryId::from("999")).await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
