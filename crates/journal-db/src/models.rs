//! Database models.

use chrono::{DateTime, SecondsFormat, Utc};
use journal_core::{EntryId, JournalEntry};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::DatabaseError;

/// A row of the `notes` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct NoteRow {
    /// UUID v4 assigned at insert.
    pub id: String,
    /// Upper-cased asset/pair.
    pub title: String,
    /// Strategy narrative.
    pub content: String,
    /// Display summary.
    pub summary: String,
    /// RFC 3339 UTC timestamp with microseconds, e.g. "2026-10-18T09:30:00.000000Z".
    pub created_at: String,
}

/// Format a timestamp the way it is stored. The fixed width keeps text
/// ordering identical to time ordering.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl TryFrom<NoteRow> for JournalEntry {
    type Error = DatabaseError;

    fn try_from(row: NoteRow) -> Result<Self, Self::Error> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|_| DatabaseError::InvalidTimestamp {
                id: row.id.clone(),
                value: row.created_at.clone(),
            })?
            .with_timezone(&Utc);

        Ok(JournalEntry {
            id: EntryId::new(row.id),
            title: row.title,
            content: row.content,
            summary: row.summary,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_fixed_width() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2026-10-18T09:30:00.000000Z");
    }

    #[test]
    fn test_row_into_entry() {
        let row = NoteRow {
            id: "abc".to_string(),
            title: "AAPL".to_string(),
            content: "Gap fill".to_string(),
            summary: "Gap fill".to_string(),
            created_at: "2026-10-18T09:30:00.000000Z".to_string(),
        };
        let entry = JournalEntry::try_from(row).unwrap();
        assert_eq!(entry.id.as_str(), "abc");
        assert_eq!(entry.display_date(), "18 Oct 2026");
    }

    #[test]
    fn test_row_with_bad_timestamp() {
        let row = NoteRow {
            id: "abc".to_string(),
            title: "AAPL".to_string(),
            content: String::new(),
            summary: String::new(),
            created_at: "yesterday".to_string(),
        };
        assert!(matches!(
            JournalEntry::try_from(row),
            Err(DatabaseError::InvalidTimestamp { .. })
        ));
    }
}
