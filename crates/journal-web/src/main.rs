//! Trading journal web interface.
//!
//! Serves the journal page and a JSON API over one shared session, plus the
//! `/api/analyze` summary endpoint.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use gemini_brain::GeminiSummarizer;
use hosted_store::HostedStore;
use journal_core::{ControllerConfig, JournalController, JournalStore, Summarizer};
use journal_db::Database;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, StoreKind};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, store = ?config.store, "Starting journal web server");

    // Open the journal store
    let store: Arc<dyn JournalStore> = match config.store {
        StoreKind::Sqlite => {
            let db = Database::connect(&config.database_url).await?;
            db.migrate().await?;
            Arc::new(db)
        }
        StoreKind::Hosted => Arc::new(HostedStore::from_env()?),
    };

    let summarizer: Arc<dyn Summarizer> = Arc::new(GeminiSummarizer::from_env()?);

    let controller = JournalController::new(
        store,
        ControllerConfig {
            summary_mode: config.summary_mode,
            summary_chars: config.summary_chars,
        },
    )
    .with_summarizer(summarizer.clone());
    let controller = Arc::new(controller);

    // Initial load, like opening the page
    controller.refresh().await;

    // Build application state
    let state = AppState::new(controller, summarizer);

    // Build router
    let app = routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Journal web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
