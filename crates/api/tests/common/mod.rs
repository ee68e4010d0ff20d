#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use agency_api::config::ServerConfig;
use agency_api::router::build_app_router;
use agency_api::state::AppState;
use agency_db::{DocumentStore, MemoryStore};

/// Build a test `ServerConfig` with safe defaults and no database settings.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        database_name: None,
        request_timeout_secs: 30,
    }
}

/// Build the full application router over an in-memory store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. The store handle is returned so
/// tests can assert on record counts directly.
pub fn build_test_app() -> (Arc<MemoryStore>, Router) {
    let store = Arc::new(MemoryStore::new());
    let app = build_app_with(Some(store.clone()));
    (store, app)
}

/// Build the application router with an explicit (possibly absent) store.
pub fn build_app_with(store: Option<Arc<dyn DocumentStore>>) -> Router {
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Build the application router with no store configured.
pub fn build_test_app_without_store() -> Router {
    build_app_with(None)
}

pub async fn get(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, path: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn post_empty(app: &Router, path: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
