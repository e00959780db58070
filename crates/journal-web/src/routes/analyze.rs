//! AI summary endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use journal_core::SummarizeError;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::state::AppState;

/// Shown when no API key is configured.
pub const MISSING_KEY_SUMMARY: &str = "API Key tidak ada.";

/// Shown for every other failure.
pub const UNAVAILABLE_SUMMARY: &str = "AI sedang sinkronisasi. Coba lagi dalam 1 menit.";

/// Request to summarize journal text.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub content: String,
}

/// Summary, or a fixed fallback string on failure.
#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub summary: String,
}

fn reply(status: StatusCode, summary: impl Into<String>) -> (StatusCode, Json<AnalyzeResponse>) {
    (
        status,
        Json(AnalyzeResponse {
            summary: summary.into(),
        }),
    )
}

/// Summarize the posted content.
///
/// Failures never leak their cause; it is only logged.
pub async fn analyze_api(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> (StatusCode, Json<AnalyzeResponse>) {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            error!(error = %rejection, "Unreadable analyze request");
            return reply(StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_SUMMARY);
        }
    };

    match state.summarizer.summarize(&request.content).await {
        Ok(summary) => {
            info!(summarizer = state.summarizer.name(), "Analysis complete");
            reply(StatusCode::OK, summary)
        }
        Err(SummarizeError::MissingApiKey) => {
            error!("Analyze requested without an API key");
            reply(StatusCode::INTERNAL_SERVER_ERROR, MISSING_KEY_SUMMARY)
        }
        Err(err) => {
            error!(summarizer = state.summarizer.name(), error = %err, "Analysis failed");
            reply(StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_SUMMARY)
        }
    }
}
