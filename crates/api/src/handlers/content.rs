//! Read handlers for the public marketing content collections.
//!
//! All three endpoints share the same pattern: query the collection with an
//! empty filter, strip the store-internal identifier from each document, and
//! decode into the typed record so the response shape is validated against
//! the schema before it leaves the service.

use axum::extract::{Query, State};
use axum::Json;
use bson::de::deserialize_from_document;
use bson::Document;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use agency_core::error::CoreError;
use agency_core::project::{self, Project};
use agency_core::service::{self, Service};
use agency_core::testimonial::{self, Testimonial};

use crate::error::AppResult;
use crate::state::AppState;

/// Default number of records returned when `?limit=` is omitted.
pub const DEFAULT_LIMIT: i64 = 12;

/// Query parameters for the content list endpoints (`?limit=`).
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

impl LimitParams {
    fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Fetch up to `limit` records from `collection` as typed values.
async fn list_collection<T>(
    state: &AppState,
    collection: &'static str,
    limit: i64,
) -> AppResult<Json<Vec<T>>>
where
    T: DeserializeOwned + Serialize,
{
    let store = state.store()?;
    let documents = store.find(collection, Document::new(), limit).await?;

    let mut records = Vec::with_capacity(documents.len());
    for mut document in documents {
        // The store-assigned identifier never leaves the API.
        document.remove("_id");
        let record = deserialize_from_document(document).map_err(|e| {
            CoreError::Storage(format!("malformed {collection} document: {e}"))
        })?;
        records.push(record);
    }

    Ok(Json(records))
}

// ---------------------------------------------------------------------------
// GET /api/projects
// ---------------------------------------------------------------------------

/// List portfolio projects.
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Project>>> {
    list_collection(&state, project::COLLECTION, params.limit()).await
}

// ---------------------------------------------------------------------------
// GET /api/testimonials
// ---------------------------------------------------------------------------

/// List client testimonials.
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Testimonial>>> {
    list_collection(&state, testimonial::COLLECTION, params.limit()).await
}

// ---------------------------------------------------------------------------
// GET /api/services
// ---------------------------------------------------------------------------

/// List offered services.
pub async fn list_services(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Service>>> {
    list_collection(&state, service::COLLECTION, params.limit()).await
}
