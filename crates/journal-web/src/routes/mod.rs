//! Route handlers for the journal web interface.

pub mod analyze;
pub mod health;
pub mod notes;
pub mod pages;


use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // HTML pages
        .route("/", get(pages::index_page))
        .route("/notes", post(pages::submit_form))
        .route("/notes/cancel", post(pages::cancel_edit))
        .route("/notes/:id", get(pages::detail_page))
        .route("/notes/:id/edit", post(pages::begin_edit))
        .route("/notes/:id/delete", post(pages::delete_entry))
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/analyze", post(analyze::analyze_api))
        .route("/api/notes", get(notes::list_api).post(notes::create_api))
        .route(
            "/api/notes/:id",
            put(notes::update_api).delete(notes::delete_api),
        )
}
