//! Note CRUD operations.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{DatabaseError, Result};
use crate::models::{format_timestamp, NoteRow};

/// Insert a note. The id and creation time are assigned here.
pub async fn create_note(
    pool: &SqlitePool,
    title: &str,
    content: &str,
    summary: &str,
) -> Result<NoteRow> {
    let row = NoteRow {
        id: Uuid::new_v4().to_string(),
        title: title.to_string(),
        content: content.to_string(),
        summary: summary.to_string(),
        created_at: format_timestamp(Utc::now()),
    };

    sqlx::query(
        r#"
        INSERT INTO notes (id, title, content, summary, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(&row.id)
    .bind(&row.title)
    .bind(&row.content)
    .bind(&row.summary)
    .bind(&row.created_at)
    .execute(pool)
    .await?;

    Ok(row)
}

/// Get a note by ID.
pub async fn get_note(pool: &SqlitePool, id: &str) -> Result<NoteRow> {
    sqlx::query_as::<_, NoteRow>(
        r#"
        SELECT id, title, content, summary, created_at
        FROM notes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Note",
        id: id.to_string(),
    })
}

/// List all notes, newest first.
pub async fn list_notes(pool: &SqlitePool) -> Result<Vec<NoteRow>> {
    let rows = sqlx::query_as::<_, NoteRow>(
        r#"
        SELECT id, title, content, summary, created_at
        FROM notes
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Rewrite the text fields of a note.
pub async fn update_note(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    content: &str,
    summary: &str,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE notes
        SET title = ?, content = ?, summary = ?
        WHERE id = ?
        "#,
    )
    .bind(title)
    .bind(content)
    .bind(summary)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Note",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a note. Returns whether a row was removed.
pub async fn delete_note(pool: &SqlitePool, id: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM notes
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
