//! Root-level diagnostic routes (mounted outside `/api`).
//!
//! `GET /test` is a deliberate "always 200, report status in body" probe:
//! external monitoring reads the body fields instead of branching on error
//! codes, so this route must never propagate a failure as an HTTP error.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::error::truncate_diagnostic;
use crate::state::AppState;

/// Maximum number of collection names reported by `GET /test`.
const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Diagnostic snapshot returned by `GET /test`.
///
/// The indicator strings match the original deployment's wording so existing
/// monitoring keeps working.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    pub backend: &'static str,
    pub database: String,
    pub database_url: &'static str,
    pub database_name: String,
    pub connection_status: &'static str,
    pub collections: Vec<String>,
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Liveness marker. No store access.
async fn read_root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Agency CRM Backend Running" }))
}

// ---------------------------------------------------------------------------
// GET /test
// ---------------------------------------------------------------------------

/// Backend and document store diagnostics.
async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let database_url = if state.config.database_url.is_some() {
        "✅ Set"
    } else {
        "❌ Not Set"
    };
    let database_name = state
        .config
        .database_name
        .clone()
        .unwrap_or_else(|| "❌ Not Set".to_string());

    let mut response = DiagnosticsResponse {
        backend: "✅ Running",
        database: "❌ Not Available".to_string(),
        database_url,
        database_name,
        connection_status: "Not Connected",
        collections: Vec::new(),
    };

    let Some(store) = &state.store else {
        return Json(response);
    };

    response.connection_status = "Connected";

    let probe = store.probe().await;
    if probe.reachable {
        response.database = "✅ Connected & Working".to_string();
        response.collections = probe
            .collections
            .into_iter()
            .take(MAX_REPORTED_COLLECTIONS)
            .collect();
    } else {
        let detail = probe.error.unwrap_or_else(|| "unknown error".to_string());
        response.database = format!("⚠️ Connected but Error: {}", truncate_diagnostic(&detail));
    }

    Json(response)
}

/// Mount the diagnostic routes (intended for root level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(read_root))
        .route("/test", get(test_database))
}
