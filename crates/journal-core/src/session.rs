//! Journal page state as an explicit reducer.
//!
//! [`SessionState::apply`] is the only way the state changes. It never talks
//! to a store; instead it returns the [`Effect`]s the caller has to run and
//! later feed back as `*Finished` / `Loaded` actions.

use std::time::Instant;

use crate::entry::{filter_by_title, EntryDraft, EntryId, JournalEntry};
use crate::toast::Toast;

pub const MSG_REQUIRED: &str = "Title and strategy are required.";
pub const MSG_BUSY: &str = "Another operation is still in progress.";
pub const MSG_SAVED: &str = "Entry saved.";
pub const MSG_UPDATED: &str = "Entry updated.";
pub const MSG_DELETED: &str = "Entry deleted.";
pub const MSG_SAVE_FAILED: &str = "Failed to process data.";
pub const MSG_DELETE_FAILED: &str = "Failed to delete data.";
pub const MSG_LOAD_FAILED: &str = "Failed to load entries.";
pub const MSG_NOT_FOUND: &str = "Entry not found.";

/// Where the page is in its save/edit/delete cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// The form holds an existing entry.
    Editing(EntryId),
    /// A create (`editing == None`) or update is in flight.
    Saving { editing: Option<EntryId> },
    /// A delete is in flight; `editing` is restored afterwards if it
    /// still refers to a live entry.
    Deleting {
        id: EntryId,
        editing: Option<EntryId>,
    },
}

impl Phase {
    fn is_busy(&self) -> bool {
        matches!(self, Phase::Saving { .. } | Phase::Deleting { .. })
    }
}

/// Raw, unvalidated form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub title: String,
    pub content: String,
}

impl FormFields {
    fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }
}

/// Everything the page can do.
#[derive(Debug, Clone)]
pub enum Action {
    SetTitle(String),
    SetContent(String),
    SetQuery(String),
    BeginEdit(EntryId),
    CancelEdit,
    Submit,
    /// Completion of an `Insert` or `Update` effect.
    SaveFinished(Result<(), String>),
    ConfirmDelete(EntryId),
    /// Completion of a `Delete` effect.
    DeleteFinished(Result<(), String>),
    /// Completion of a `Refetch` effect.
    Loaded(Vec<JournalEntry>),
    LoadFailed(String),
    DismissToast,
}

/// A store call requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Insert(EntryDraft),
    Update(EntryId, EntryDraft),
    Delete(EntryId),
    Refetch,
}

/// Client-side state of the journal page.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub phase: Phase,
    pub form: FormFields,
    /// Last fetched list, newest first.
    pub entries: Vec<JournalEntry>,
    pub query: String,
    pub toast: Option<Toast>,
    summary_chars: usize,
}

impl SessionState {
    pub fn new(summary_chars: usize) -> Self {
        Self {
            phase: Phase::Idle,
            form: FormFields::default(),
            entries: Vec::new(),
            query: String::new(),
            toast: None,
            summary_chars,
        }
    }

    /// Whether a store write is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }

    /// Id of the entry currently loaded in the form, if any.
    pub fn editing_id(&self) -> Option<&EntryId> {
        match &self.phase {
            Phase::Editing(id) => Some(id),
            Phase::Saving { editing } => editing.as_ref(),
            Phase::Deleting { editing, .. } => editing.as_ref(),
            Phase::Idle => None,
        }
    }

    /// Look up a cached entry.
    pub fn entry(&self, id: &EntryId) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Cached entries matching the current search query.
    pub fn visible_entries(&self) -> Vec<&JournalEntry> {
        filter_by_title(&self.entries, &self.query)
    }

    /// The toast, if it has not expired at `now`.
    pub fn visible_toast(&self, now: Instant) -> Option<&Toast> {
        self.toast.as_ref().filter(|toast| toast.is_visible(now))
    }

    /// Apply an action and return the effects to run.
    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::SetTitle(title) => {
                self.form.title = title;
                vec![]
            }
            Action::SetContent(content) => {
                self.form.content = content;
                vec![]
            }
            Action::SetQuery(query) => {
                self.query = query;
                vec![]
            }
            Action::BeginEdit(id) => self.begin_edit(id),
            Action::CancelEdit => self.cancel_edit(),
            Action::Submit => self.submit(),
            Action::SaveFinished(result) => self.save_finished(result),
            Action::ConfirmDelete(id) => self.confirm_delete(id),
            Action::DeleteFinished(result) => self.delete_finished(result),
            Action::Loaded(entries) => {
                self.entries = entries;
                vec![]
            }
            Action::LoadFailed(_) => {
                self.toast = Some(Toast::error(MSG_LOAD_FAILED));
                vec![]
            }
            Action::DismissToast => {
                self.toast = None;
                vec![]
            }
        }
    }

    fn reject_busy(&mut self) -> Vec<Effect> {
        self.toast = Some(Toast::warn(MSG_BUSY));
        vec![]
    }

    fn begin_edit(&mut self, id: EntryId) -> Vec<Effect> {
        if self.is_busy() {
            return self.reject_busy();
        }

        let Some(entry) = self.entry(&id) else {
            self.toast = Some(Toast::error(MSG_NOT_FOUND));
            return vec![];
        };

        self.form = FormFields {
            title: entry.title.clone(),
            content: entry.content.clone(),
        };
        self.phase = Phase::Editing(id);
        vec![]
    }

    fn cancel_edit(&mut self) -> Vec<Effect> {
        if self.is_busy() {
            return self.reject_busy();
        }

        self.phase = Phase::Idle;
        self.form.clear();
        vec![]
    }

    fn submit(&mut self) -> Vec<Effect> {
        if self.is_busy() {
            return self.reject_busy();
        }

        let draft = match EntryDraft::from_form(
            &self.form.title,
            &self.form.content,
            self.summary_chars,
        ) {
            Ok(draft) => draft,
            Err(_) => {
                self.toast = Some(Toast::warn(MSG_REQUIRED));
                return vec![];
            }
        };

        let editing = self.editing_id().cloned();
        let effect = match &editing {
            Some(id) => Effect::Update(id.clone(), draft),
            None => Effect::Insert(draft),
        };
        self.phase = Phase::Saving { editing };
        vec![effect]
    }

    fn save_finished(&mut self, result: Result<(), String>) -> Vec<Effect> {
        let editing = match &self.phase {
            Phase::Saving { editing } => editing.clone(),
            _ => return vec![],
        };
        self.phase = Phase::Idle;

        match result {
            Ok(()) => {
                let message = if editing.is_some() { MSG_UPDATED } else { MSG_SAVED };
                self.toast = Some(Toast::success(message));
                self.form.clear();
            }
            Err(_) => {
                // Keep the form so the user can retry.
                self.toast = Some(Toast::error(MSG_SAVE_FAILED));
                if let Some(id) = editing {
                    self.phase = Phase::Editing(id);
                }
            }
        }
        vec![Effect::Refetch]
    }

    fn confirm_delete(&mut self, id: EntryId) -> Vec<Effect> {
        if self.is_busy() {
            return self.reject_busy();
        }

        let editing = self.editing_id().cloned();
        self.phase = Phase::Deleting {
            id: id.clone(),
            editing,
        };
        vec![Effect::Delete(id)]
    }

    fn delete_finished(&mut self, result: Result<(), String>) -> Vec<Effect> {
        let (id, editing) = match &self.phase {
            Phase::Deleting { id, editing } => (id.clone(), editing.clone()),
            _ => return vec![],
        };
        self.phase = Phase::Idle;

        match result {
            Ok(()) => {
                self.toast = Some(Toast::success(MSG_DELETED));
                match editing {
                    Some(editing) if editing != id => self.phase = Phase::Editing(editing),
                    Some(_) => self.form.clear(),
                    None => {}
                }
            }
            Err(_) => {
                self.toast = Some(Toast::error(MSG_DELETE_FAILED));
                if let Some(editing) = editing {
                    self.phase = Phase::Editing(editing);
                }
            }
        }
        vec![Effect::Refetch]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastKind;
    use chrono::{TimeZone, Utc};

    fn entry(id: &str, title: &str, content: &str) -> JournalEntry {
        JournalEntry {
            id: EntryId::from(id),
            title: title.to_string(),
            content: content.to_string(),
            summary: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap(),
        }
    }

    fn loaded_state() -> SessionState {
        let mut state = SessionState::new(60);
        state.apply(Action::Loaded(vec![
            entry("2", "ETH/USDT", "range trade"),
            entry("1", "BTC/USDT", "breakout"),
        ]));
        state
    }

    fn fill(state: &mut SessionState, title: &str, content: &str) {
        state.apply(Action::SetTitle(title.to_string()));
        state.apply(Action::SetContent(content.to_string()));
    }

    fn toast_kind(state: &SessionState) -> Option<ToastKind> {
        state.toast.as_ref().map(|t| t.kind)
    }

    #[test]
    fn test_submit_empty_fields_warns_without_effects() {
        let mut state = SessionState::new(60);
        fill(&mut state, "  ", "content");
        assert!(state.apply(Action::Submit).is_empty());
        assert_eq!(toast_kind(&state), Some(ToastKind::Warn));
        assert_eq!(state.phase, Phase::Idle);

        fill(&mut state, "BTC", "\n");
        assert!(state.apply(Action::Submit).is_empty());
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_REQUIRED);
    }

    #[test]
    fn test_submit_from_idle_inserts() {
        let mut state = SessionState::new(60);
        fill(&mut state, "btc/usdt", "breakout");

        let effects = state.apply(Action::Submit);
        assert_eq!(
            effects,
            vec![Effect::Insert(EntryDraft {
                title: "BTC/USDT".to_string(),
                content: "breakout".to_string(),
                summary: "breakout".to_string(),
            })]
        );
        assert_eq!(state.phase, Phase::Saving { editing: None });
    }

    #[test]
    fn test_save_success_clears_form_and_refetches() {
        let mut state = SessionState::new(60);
        fill(&mut state, "btc", "breakout");
        state.apply(Action::Submit);

        let effects = state.apply(Action::SaveFinished(Ok(())));
        assert_eq!(effects, vec![Effect::Refetch]);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.form, FormFields::default());
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_SAVED);
    }

    #[test]
    fn test_save_failure_keeps_form_and_refetches() {
        let mut state = SessionState::new(60);
        fill(&mut state, "btc", "breakout");
        state.apply(Action::Submit);

        let effects = state.apply(Action::SaveFinished(Err("boom".to_string())));
        assert_eq!(effects, vec![Effect::Refetch]);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.form.title, "btc");
        assert_eq!(toast_kind(&state), Some(ToastKind::Error));
    }

    #[test]
    fn test_begin_edit_populates_form() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("1")));

        assert_eq!(state.phase, Phase::Editing(EntryId::from("1")));
        assert_eq!(state.form.title, "BTC/USDT");
        assert_eq!(state.form.content, "breakout");
    }

    #[test]
    fn test_begin_edit_unknown_entry() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("missing")));

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_NOT_FOUND);
    }

    #[test]
    fn test_cancel_edit_clears_form() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("1")));
        state.apply(Action::CancelEdit);

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.form, FormFields::default());
    }

    #[test]
    fn test_submit_while_editing_updates_same_id() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("1")));
        state.apply(Action::SetContent("retest failed, closed".to_string()));

        let effects = state.apply(Action::Submit);
        match &effects[..] {
            [Effect::Update(id, draft)] => {
                assert_eq!(id.as_str(), "1");
                assert_eq!(draft.content, "retest failed, closed");
                assert_eq!(draft.title, "BTC/USDT");
            }
            other => panic!("unexpected effects: {:?}", other),
        }

        state.apply(Action::SaveFinished(Ok(())));
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_UPDATED);
    }

    #[test]
    fn test_failed_update_returns_to_editing() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("1")));
        state.apply(Action::Submit);
        state.apply(Action::SaveFinished(Err("offline".to_string())));

        assert_eq!(state.phase, Phase::Editing(EntryId::from("1")));
        assert_eq!(state.form.title, "BTC/USDT");
    }

    #[test]
    fn test_concurrent_submit_rejected() {
        let mut state = SessionState::new(60);
        fill(&mut state, "btc", "breakout");
        assert_eq!(state.apply(Action::Submit).len(), 1);

        assert!(state.apply(Action::Submit).is_empty());
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_BUSY);
        assert!(state.apply(Action::ConfirmDelete(EntryId::from("1"))).is_empty());
        assert!(state.is_busy());
    }

    #[test]
    fn test_delete_cycle() {
        let mut state = loaded_state();
        let effects = state.apply(Action::ConfirmDelete(EntryId::from("2")));
        assert_eq!(effects, vec![Effect::Delete(EntryId::from("2"))]);
        assert!(state.is_busy());

        let effects = state.apply(Action::DeleteFinished(Ok(())));
        assert_eq!(effects, vec![Effect::Refetch]);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_DELETED);
    }

    #[test]
    fn test_delete_entry_being_edited_clears_form() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("1")));
        state.apply(Action::ConfirmDelete(EntryId::from("1")));
        state.apply(Action::DeleteFinished(Ok(())));

        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.form, FormFields::default());
    }

    #[test]
    fn test_delete_other_entry_keeps_editing() {
        let mut state = loaded_state();
        state.apply(Action::BeginEdit(EntryId::from("1")));
        state.apply(Action::ConfirmDelete(EntryId::from("2")));
        state.apply(Action::DeleteFinished(Ok(())));

        assert_eq!(state.phase, Phase::Editing(EntryId::from("1")));
        assert_eq!(state.form.title, "BTC/USDT");
    }

    #[test]
    fn test_delete_failure_toasts_error() {
        let mut state = loaded_state();
        state.apply(Action::ConfirmDelete(EntryId::from("2")));
        let effects = state.apply(Action::DeleteFinished(Err("denied".to_string())));

        assert_eq!(effects, vec![Effect::Refetch]);
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.toast.as_ref().unwrap().message, MSG_DELETE_FAILED);
    }

    #[test]
    fn test_stale_completion_ignored() {
        let mut state = loaded_state();
        assert!(state.apply(Action::SaveFinished(Ok(()))).is_empty());
        assert!(state.apply(Action::DeleteFinished(Ok(()))).is_empty());
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_search_filters_visible_entries() {
        let mut state = loaded_state();
        state.apply(Action::SetQuery("eth".to_string()));
        let visible: Vec<_> = state.visible_entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(visible, vec!["2"]);

        state.apply(Action::SetQuery(String::new()));
        assert_eq!(state.visible_entries().len(), 2);
    }

    #[test]
    fn test_new_toast_overwrites_previous() {
        let mut state = SessionState::new(60);
        state.apply(Action::Submit);
        state.apply(Action::LoadFailed("down".to_string()));

        assert_eq!(state.toast.as_ref().unwrap().message, MSG_LOAD_FAILED);
        state.apply(Action::DismissToast);
        assert!(state.toast.is_none());
    }
}
