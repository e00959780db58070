//! JournalStore implementation backed by SQLite.

use async_trait::async_trait;
use journal_core::{EntryDraft, EntryId, JournalEntry, JournalStore, StoreError};

use crate::notes;
use crate::Database;

#[async_trait]
impl JournalStore for Database {
    async fn list(&self) -> Result<Vec<JournalEntry>, StoreError> {
        let rows = notes::list_notes(self.pool()).await?;
        rows.into_iter()
            .map(|row| JournalEntry::try_from(row).map_err(StoreError::from))
            .collect()
    }

    async fn insert(&self, draft: &EntryDraft) -> Result<JournalEntry, StoreError> {
        let row =
            notes::create_note(self.pool(), &draft.title, &draft.content, &draft.summary).await?;
        Ok(JournalEntry::try_from(row)?)
    }

    async fn update(&self, id: &EntryId, draft: &EntryDraft) -> Result<(), StoreError> {
        notes::update_note(
            self.pool(),
            id.as_str(),
            &draft.title,
            &draft.content,
            &draft.summary,
        )
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        if !notes::delete_note(self.pool(), id.as_str()).await? {
            tracing::debug!(id = %id, "Delete matched no note");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "SqliteStore"
    }
}
