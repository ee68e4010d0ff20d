pub mod diagnostics;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content, leads, seed};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /projects?limit=      -> content::list_projects
/// GET  /testimonials?limit=  -> content::list_testimonials
/// GET  /services?limit=      -> content::list_services
/// POST /leads                -> leads::submit_lead
/// POST /seed                 -> seed::seed_demo_content
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(content::list_projects))
        .route("/testimonials", get(content::list_testimonials))
        .route("/services", get(content::list_services))
        .route("/leads", post(leads::submit_lead))
        .route("/seed", post(seed::seed_demo_content))
}
