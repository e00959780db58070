//! Server-rendered journal page.

use std::time::Instant;

use askama::Template;
use axum::extract::{Form, Path, Query, State};
use axum::response::Redirect;
use journal_core::{EntryId, JournalEntry, SessionState};
use serde::Deserialize;

use crate::error::{Result, WebError};
use crate::routes::notes::SearchQuery;
use crate::state::AppState;

/// Journal page template.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub form_title: String,
    pub form_content: String,
    pub editing: bool,
    pub busy: bool,
    pub query: String,
    pub toast: Option<ToastView>,
    pub entries: Vec<EntryCard>,
}

/// Entry detail template.
#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub entry: EntryCard,
    pub content: String,
}

/// The current toast, ready for display.
pub struct ToastView {
    pub message: String,
    pub kind: &'static str,
}

/// One entry in the list.
pub struct EntryCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: String,
}

impl From<&JournalEntry> for EntryCard {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title.clone(),
            summary: entry.summary.clone(),
            date: entry.display_date(),
        }
    }
}

impl IndexTemplate {
    fn from_state(state: &SessionState, now: Instant) -> Self {
        Self {
            form_title: state.form.title.clone(),
            form_content: state.form.content.clone(),
            editing: state.editing_id().is_some(),
            busy: state.is_busy(),
            query: state.query.clone(),
            toast: state.visible_toast(now).map(|toast| ToastView {
                message: toast.message.clone(),
                kind: toast.kind.as_str(),
            }),
            entries: state.visible_entries().into_iter().map(EntryCard::from).collect(),
        }
    }
}

/// Journal form fields.
#[derive(Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Render the journal page.
pub async fn index_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> IndexTemplate {
    state.controller.set_query(query.q.unwrap_or_default()).await;
    state.controller.refresh().await;

    let snapshot = state.controller.snapshot().await;
    IndexTemplate::from_state(&snapshot, Instant::now())
}

/// Render one entry in full.
pub async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<DetailTemplate> {
    let id = EntryId::from(id);
    let snapshot = state.controller.snapshot().await;
    let entry = snapshot
        .entry(&id)
        .ok_or_else(|| WebError::NotFound(journal_core::MSG_NOT_FOUND.to_string()))?;

    Ok(DetailTemplate {
        entry: EntryCard::from(entry),
        content: entry.content.clone(),
    })
}

/// Save the form as a new entry or as the entry being edited.
pub async fn submit_form(State(state): State<AppState>, Form(form): Form<NoteForm>) -> Redirect {
    state.controller.submit_form(&form.title, &form.content).await;
    Redirect::to("/")
}

/// Load an entry into the form.
pub async fn begin_edit(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.controller.begin_edit(EntryId::from(id)).await;
    Redirect::to("/")
}

/// Leave edit mode.
pub async fn cancel_edit(State(state): State<AppState>) -> Redirect {
    state.controller.cancel_edit().await;
    Redirect::to("/")
}

/// Delete an entry. The page asks for confirmation before posting.
pub async fn delete_entry(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    state.controller.delete(EntryId::from(id)).await;
    Redirect::to("/")
}
