//! JSON API over the journal session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use journal_core::{filter_by_title, DispatchReport, EntryId, JournalEntry};
use serde::Deserialize;

use crate::error::{Result, WebError};
use crate::state::AppState;

/// Search parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Create or update payload.
#[derive(Deserialize)]
pub struct NoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// List entries, newest first, optionally filtered by title.
pub async fn list_api(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<JournalEntry>>> {
    let report = state.controller.refresh().await;
    check(&report)?;

    let snapshot = state.controller.snapshot().await;
    let query = query.q.unwrap_or_default();
    let entries = filter_by_title(&snapshot.entries, &query)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(entries))
}

/// Create an entry.
pub async fn create_api(
    State(state): State<AppState>,
    Json(req): Json<NoteRequest>,
) -> Result<(StatusCode, Json<JournalEntry>)> {
    let report = state.controller.create(&req.title, &req.content).await;
    let entry = written_entry(report)?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Rewrite an existing entry.
pub async fn update_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<NoteRequest>,
) -> Result<Json<JournalEntry>> {
    let report = state
        .controller
        .update(EntryId::from(id), &req.title, &req.content)
        .await;
    let entry = written_entry(report)?;
    Ok(Json(entry))
}

/// Delete an entry. Unknown ids succeed.
pub async fn delete_api(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let report = state.controller.delete(EntryId::from(id)).await;
    check(&report)?;
    Ok(StatusCode::NO_CONTENT)
}

fn check(report: &DispatchReport) -> Result<()> {
    match WebError::from_report(report) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// The entry a create/update wrote, as the store accepted it.
///
/// A stored write is reported even when the refetch that followed it failed,
/// so a retrying client does not store it twice.
fn written_entry(report: DispatchReport) -> Result<JournalEntry> {
    if report.written.is_none() {
        check(&report)?;
    }
    report
        .written
        .ok_or_else(|| WebError::Internal("no entry was written".to_string()))
}
