//! # HTTP API
//! Axum router and handlers behind the demo page: analyze text, list history,
//! download the CSV report. The model is process-wide read-only state.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::error;

use crate::analyze::{self, AnalysisResult};
use crate::history::History;
use crate::model::AbuseModel;
use crate::report;

/// Number of history entries exposed to the UI.
const HISTORY_DISPLAY_LIMIT: usize = 15;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<AbuseModel>,
    pub history: Arc<History>,
}

pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/analyze", post(analyze_text))
        .route("/history", get(history))
        .route("/report", post(download_report))
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct AnalyzeReq {
    text: String,
}

/// Run the full pipeline. Empty/whitespace input is a no-op: the response is
/// JSON `null` and nothing is recorded in history.
async fn analyze_text(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Json<Option<AnalysisResult>> {
    let result = analyze::analyze(&state.model, &body.text);
    if result.is_some() {
        state.history.push(&body.text);
    }
    Json(result)
}

/// Last analyzed inputs, newest first.
async fn history(State(state): State<AppState>) -> Json<Vec<String>> {
    let mut entries = state.history.snapshot_last_n(HISTORY_DISPLAY_LIMIT);
    entries.reverse();
    Json(entries)
}

/// CSV download of the suggestion table for one input.
async fn download_report(
    State(state): State<AppState>,
    Json(body): Json<AnalyzeReq>,
) -> Response {
    let Some(result) = analyze::analyze(&state.model, &body.text) else {
        return StatusCode::NO_CONTENT.into_response();
    };

    let rows = report::suggestion_rows(&result.abusive_tokens);
    match report::to_csv(&rows) {
        Ok(csv) => (
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"abuse_report.csv\"",
                ),
            ],
            csv,
        )
            .into_response(),
        Err(err) => {
            error!(error = ?err, "report encoding failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
