//! Handler for the demo-content seed endpoint.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::seed;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub seeded: bool,
}

// ---------------------------------------------------------------------------
// POST /api/seed
// ---------------------------------------------------------------------------

/// Populate the content collections with demo records.
///
/// Idempotent: each collection is only seeded while empty. Fails with a
/// server error when the store is unconfigured at call time.
pub async fn seed_demo_content(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let store = state.store()?;
    seed::run(store.as_ref()).await?;

    Ok(Json(SeedResponse { seeded: true }))
}
