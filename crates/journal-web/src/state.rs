//! Application state shared across handlers.

use std::sync::Arc;

use journal_core::{JournalController, Summarizer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The single journal session.
    pub controller: Arc<JournalController>,
    /// Summarizer behind `/api/analyze`.
    pub summarizer: Arc<dyn Summarizer>,
}

impl AppState {
    /// Create new application state.
    pub fn new(controller: Arc<JournalController>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            controller,
            summarizer,
        }
    }
}
