use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use agency_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] to produce consistent
/// JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Maximum length of a storage/configuration diagnostic in a response body.
pub const MAX_DIAGNOSTIC_LEN: usize = 80;

/// Truncate a diagnostic message to [`MAX_DIAGNOSTIC_LEN`] characters.
///
/// Applied only at the response-formatting boundary; logs always carry the
/// full message.
pub fn truncate_diagnostic(message: &str) -> String {
    message.chars().take(MAX_DIAGNOSTIC_LEN).collect()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Core(core) = self;

        let (status, body) = match core {
            // Field-level detail so the contact form can point at the
            // offending input.
            CoreError::Validation {
                entity,
                field,
                reason,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": reason,
                    "code": "VALIDATION_ERROR",
                    "entity": entity,
                    "field": field,
                }),
            ),

            CoreError::Storage(message) => {
                tracing::error!(error = %message, "Document store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": truncate_diagnostic(&message),
                        "code": "STORAGE_ERROR",
                    }),
                )
            }

            CoreError::Configuration(message) => {
                tracing::error!(error = %message, "Document store not configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": truncate_diagnostic(&message),
                        "code": "CONFIGURATION_ERROR",
                    }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}
