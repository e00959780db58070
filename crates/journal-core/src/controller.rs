//! Async driver for the session reducer.

use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::entry::{EntryDraft, EntryId, JournalEntry, DEFAULT_SUMMARY_CHARS};
use crate::session::{Action, Effect, SessionState, MSG_REQUIRED};
use crate::store::JournalStore;
use crate::summarizer::{Summarizer, SummaryMode};
use crate::toast::Toast;

/// Controller settings.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// How stored summaries are produced.
    pub summary_mode: SummaryMode,
    /// Character budget for the naive truncation summary.
    pub summary_chars: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            summary_mode: SummaryMode::Truncate,
            summary_chars: DEFAULT_SUMMARY_CHARS,
        }
    }
}

/// What a dispatched action led to.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// Toast raised while handling the action, if any.
    pub toast: Option<Toast>,
    /// Entry inserted or updated by the action, as the store accepted it.
    pub written: Option<JournalEntry>,
}

/// Runs [`SessionState`] transitions against a [`JournalStore`].
///
/// The state lock is only held while the reducer runs, never across a store
/// call. Writes that arrive while another one is in flight are rejected by
/// the reducer, so overlapping submits cannot both reach the store.
///
/// Effects run on their own task. A caller that is dropped mid-save does not
/// strand the session in a busy phase; the store call still completes and
/// its outcome is fed back to the reducer.
pub struct JournalController {
    runner: EffectRunner,
    config: ControllerConfig,
}

impl JournalController {
    /// Create a controller over the given store.
    pub fn new(store: Arc<dyn JournalStore>, config: ControllerConfig) -> Self {
        info!(
            "JournalController initialized with store: {}, summary mode: {:?}",
            store.name(),
            config.summary_mode
        );

        Self {
            runner: EffectRunner {
                store,
                summarizer: None,
                summary_mode: config.summary_mode,
                state: Arc::new(Mutex::new(SessionState::new(config.summary_chars))),
            },
            config,
        }
    }

    /// Attach a summarizer used when the summary mode is [`SummaryMode::Ai`].
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarizer>) -> Self {
        self.runner.summarizer = Some(summarizer);
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Get the backing store.
    pub fn store(&self) -> &Arc<dyn JournalStore> {
        &self.runner.store
    }

    /// A copy of the current session state.
    pub async fn snapshot(&self) -> SessionState {
        self.runner.state.lock().await.clone()
    }

    /// Apply one action and run everything it triggers.
    pub async fn dispatch(&self, action: Action) -> DispatchReport {
        self.dispatch_all(vec![action]).await
    }

    /// Apply several actions atomically, then run the resulting effects.
    pub async fn dispatch_all(&self, actions: Vec<Action>) -> DispatchReport {
        self.dispatch_with(|state| apply_all(state, actions)).await
    }

    /// Refetch the full list from the store.
    pub async fn refresh(&self) -> DispatchReport {
        self.dispatch_with(|_| vec![Effect::Refetch]).await
    }

    pub async fn set_title(&self, title: impl Into<String>) {
        self.dispatch(Action::SetTitle(title.into())).await;
    }

    pub async fn set_content(&self, content: impl Into<String>) {
        self.dispatch(Action::SetContent(content.into())).await;
    }

    pub async fn set_query(&self, query: impl Into<String>) {
        self.dispatch(Action::SetQuery(query.into())).await;
    }

    pub async fn begin_edit(&self, id: EntryId) -> DispatchReport {
        self.dispatch(Action::BeginEdit(id)).await
    }

    pub async fn cancel_edit(&self) -> DispatchReport {
        self.dispatch(Action::CancelEdit).await
    }

    /// Submit whatever the form currently holds.
    pub async fn submit(&self) -> DispatchReport {
        self.dispatch(Action::Submit).await
    }

    /// Fill the form and submit it as a new entry or, while editing, as an
    /// update of the edited entry.
    pub async fn submit_form(&self, title: &str, content: &str) -> DispatchReport {
        let actions = vec![
            Action::SetTitle(title.to_string()),
            Action::SetContent(content.to_string()),
            Action::Submit,
        ];
        self.dispatch_with(|state| fill_unless_busy(state, actions)).await
    }

    /// Create a new entry, leaving edit mode first.
    ///
    /// Rejected input only raises the warning; the form and any edit in
    /// progress are left as they were.
    pub async fn create(&self, title: &str, content: &str) -> DispatchReport {
        let chars = self.config.summary_chars;
        let (title, content) = (title.to_string(), content.to_string());
        self.dispatch_with(move |state| {
            if state.is_busy() {
                return state.apply(Action::Submit);
            }
            if !is_valid(&title, &content, chars) {
                return warn_required(state);
            }
            apply_all(
                state,
                vec![
                    Action::CancelEdit,
                    Action::SetTitle(title),
                    Action::SetContent(content),
                    Action::Submit,
                ],
            )
        })
        .await
    }

    /// Load an entry into the form, overwrite its fields and submit.
    ///
    /// An id missing from the cached list only raises the not-found toast;
    /// it never falls through to an insert. Rejected input leaves the
    /// session untouched apart from the warning.
    pub async fn update(&self, id: EntryId, title: &str, content: &str) -> DispatchReport {
        let chars = self.config.summary_chars;
        let (title, content) = (title.to_string(), content.to_string());
        self.dispatch_with(move |state| {
            if state.is_busy() || state.entry(&id).is_none() {
                return state.apply(Action::BeginEdit(id));
            }
            if !is_valid(&title, &content, chars) {
                return warn_required(state);
            }
            apply_all(
                state,
                vec![
                    Action::BeginEdit(id),
                    Action::SetTitle(title),
                    Action::SetContent(content),
                    Action::Submit,
                ],
            )
        })
        .await
    }

    /// Delete an entry after the user confirmed it.
    pub async fn delete(&self, id: EntryId) -> DispatchReport {
        self.dispatch(Action::ConfirmDelete(id)).await
    }

    pub async fn dismiss_toast(&self) {
        self.dispatch(Action::DismissToast).await;
    }

    /// Mutate the state under the lock, then run the effects it produced.
    ///
    /// The report carries the toast only if it changed.
    async fn dispatch_with<F>(&self, reduce: F) -> DispatchReport
    where
        F: FnOnce(&mut SessionState) -> Vec<Effect>,
    {
        let (before, effects) = {
            let mut state = self.runner.state.lock().await;
            let before = state.toast.clone();
            let effects = reduce(&mut *state);
            (before, effects)
        };

        let written = if effects.is_empty() {
            None
        } else {
            match tokio::spawn(self.runner.clone().run(effects)).await {
                Ok(written) => written,
                Err(err) => {
                    error!(error = %err, "Effect task failed");
                    None
                }
            }
        };

        let state = self.runner.state.lock().await;
        let toast = if state.toast != before {
            state.toast.clone()
        } else {
            None
        };

        DispatchReport { toast, written }
    }
}

/// Everything a spawned effect loop needs, detached from the controller's
/// lifetime.
#[derive(Clone)]
struct EffectRunner {
    store: Arc<dyn JournalStore>,
    summarizer: Option<Arc<dyn Summarizer>>,
    summary_mode: SummaryMode,
    state: Arc<Mutex<SessionState>>,
}

impl EffectRunner {
    /// Execute effects until the reducer stops asking for more.
    async fn run(self, effects: Vec<Effect>) -> Option<JournalEntry> {
        let mut queue: VecDeque<Effect> = effects.into();
        let mut written = None;

        while let Some(effect) = queue.pop_front() {
            let follow_up = match effect {
                Effect::Insert(draft) => {
                    let draft = self.prepare_summary(draft).await;
                    match self.store.insert(&draft).await {
                        Ok(entry) => {
                            info!(id = %entry.id, title = %entry.title, "Journal entry created");
                            written = Some(entry);
                            Action::SaveFinished(Ok(()))
                        }
                        Err(err) => {
                            error!(error = %err, "Failed to insert journal entry");
                            Action::SaveFinished(Err(err.to_string()))
                        }
                    }
                }
                Effect::Update(id, draft) => {
                    let draft = self.prepare_summary(draft).await;
                    match self.store.update(&id, &draft).await {
                        Ok(()) => {
                            info!(id = %id, "Journal entry updated");
                            let created_at =
                                self.state.lock().await.entry(&id).map(|e| e.created_at);
                            written = created_at.map(|created_at| JournalEntry {
                                id,
                                title: draft.title,
                                content: draft.content,
                                summary: draft.summary,
                                created_at,
                            });
                            Action::SaveFinished(Ok(()))
                        }
                        Err(err) => {
                            error!(id = %id, error = %err, "Failed to update journal entry");
                            Action::SaveFinished(Err(err.to_string()))
                        }
                    }
                }
                Effect::Delete(id) => match self.store.delete(&id).await {
                    Ok(()) => {
                        info!(id = %id, "Journal entry deleted");
                        Action::DeleteFinished(Ok(()))
                    }
                    Err(err) => {
                        error!(id = %id, error = %err, "Failed to delete journal entry");
                        Action::DeleteFinished(Err(err.to_string()))
                    }
                },
                Effect::Refetch => match self.store.list().await {
                    Ok(entries) => {
                        debug!(count = entries.len(), "Fetched journal entries");
                        Action::Loaded(entries)
                    }
                    Err(err) => {
                        error!(error = %err, "Failed to fetch journal entries");
                        Action::LoadFailed(err.to_string())
                    }
                },
            };

            let mut state = self.state.lock().await;
            queue.extend(state.apply(follow_up));
        }

        written
    }

    /// Swap in an AI summary when configured; keep the truncation otherwise.
    async fn prepare_summary(&self, draft: EntryDraft) -> EntryDraft {
        if self.summary_mode != SummaryMode::Ai {
            return draft;
        }

        let Some(summarizer) = &self.summarizer else {
            warn!("AI summary mode configured without a summarizer, using truncation");
            return draft;
        };

        match summarizer.summarize(&draft.content).await {
            Ok(summary) => draft.with_summary(summary),
            Err(err) => {
                warn!(
                    summarizer = summarizer.name(),
                    error = %err,
                    "AI summary failed, using truncation"
                );
                draft
            }
        }
    }
}

fn is_valid(title: &str, content: &str, summary_chars: usize) -> bool {
    EntryDraft::from_form(title, content, summary_chars).is_ok()
}

fn warn_required(state: &mut SessionState) -> Vec<Effect> {
    state.toast = Some(Toast::warn(MSG_REQUIRED));
    Vec::new()
}

fn apply_all(state: &mut SessionState, actions: Vec<Action>) -> Vec<Effect> {
    actions
        .into_iter()
        .flat_map(|action| state.apply(action))
        .collect()
}

/// Apply form-filling actions, leaving the pending form alone while a write
/// is in flight.
fn fill_unless_busy(state: &mut SessionState, actions: Vec<Action>) -> Vec<Effect> {
    if state.is_busy() {
        // Only raises the busy toast.
        return state.apply(Action::Submit);
    }
    apply_all(state, actions)
}
