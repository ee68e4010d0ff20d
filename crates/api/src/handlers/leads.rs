//! Lead intake from the website contact form.

use axum::extract::State;
use axum::Json;
use bson::ser::serialize_to_document;
use serde::Serialize;

use agency_core::error::CoreError;
use agency_core::lead::{self, Lead};

use crate::error::AppResult;
use crate::state::AppState;

/// Confirmation message shown to the prospect after a successful submission.
pub const CONFIRMATION_MESSAGE: &str = "Thanks! We'll get back to you within 24 hours.";

/// Response payload for a captured lead.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub success: bool,
    pub message: &'static str,
}

// ---------------------------------------------------------------------------
// POST /api/leads
// ---------------------------------------------------------------------------

/// Capture a contact-form submission.
///
/// Validation runs before any store access, so a rejected payload never
/// results in a write. Store failures surface as a server error carrying the
/// (truncated) failure description.
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(payload): Json<Lead>,
) -> AppResult<Json<LeadResponse>> {
    lead::validate(&payload)?;

    let store = state.store()?;
    let document =
        serialize_to_document(&payload).map_err(|e| CoreError::Storage(e.to_string()))?;
    let id = store.insert(lead::COLLECTION, document).await?;

    // Deliberately no email or message in the log line.
    tracing::info!(id = %id, source = %payload.source, "Lead captured");

    Ok(Json(LeadResponse {
        success: true,
        message: CONFIRMATION_MESSAGE,
    }))
}
