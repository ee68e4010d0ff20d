use std::sync::Arc;

use agency_core::error::CoreError;
use agency_db::DocumentStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Document store handle. `None` when `DATABASE_URL` / `DATABASE_NAME`
    /// were never supplied; routes must treat that as "store unavailable"
    /// rather than panicking or reading the environment themselves.
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// The store handle, or [`CoreError::Configuration`] when absent.
    ///
    /// Used by every route except the diagnostics endpoint, which reports
    /// the absent store in its body instead of failing.
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, CoreError> {
        self.store.as_ref().ok_or_else(|| {
            CoreError::Configuration(
                "database connection settings were never supplied".to_string(),
            )
        })
    }
}
