/// Closed error enumeration shared by every layer of the service.
///
/// The API layer decides the HTTP status for each variant; message
/// truncation for diagnostics is a presentation concern and happens at the
/// response-formatting boundary, never here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required input field is missing, empty, or fails a format check.
    #[error("Validation failed: {entity}.{field} {reason}")]
    Validation {
        entity: &'static str,
        field: &'static str,
        reason: String,
    },

    /// The document store is unreachable or rejected the operation.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The document store was never configured (connection settings absent).
    #[error("Store not configured: {0}")]
    Configuration(String),
}

/// Reject `value` with a [`CoreError::Validation`] if it is empty or blank.
pub fn require_non_empty(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            entity,
            field,
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require_non_empty("Lead", "name", "").is_err());
        assert!(require_non_empty("Lead", "name", "   ").is_err());
        assert!(require_non_empty("Lead", "name", "Ava").is_ok());
    }

    #[test]
    fn validation_error_names_the_field() {
        let err = require_non_empty("Lead", "name", "").unwrap_err();
        match err {
            CoreError::Validation { entity, field, .. } => {
                assert_eq!(entity, "Lead");
                assert_eq!(field, "name");
            }
            other => panic!("Expected Validation, got {other:?}"),
        }
    }
}
