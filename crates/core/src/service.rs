//! Services offered by the agency.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_empty, CoreError};

/// Collection name in the document store.
pub const COLLECTION: &str = "service";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
    /// Icon identifier used by the website frontend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

pub fn validate(service: &Service) -> Result<(), CoreError> {
    require_non_empty("Service", "name", &service.name)?;
    require_non_empty("Service", "description", &service.description)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_is_optional() {
        let s: Service =
            serde_json::from_str(r#"{"name": "Web Apps", "description": "APIs"}"#).unwrap();
        assert_eq!(s.icon, None);
        assert!(validate(&s).is_ok());
    }

    #[test]
    fn blank_description_is_rejected() {
        let s: Service = serde_json::from_str(r#"{"name": "Web Apps", "description": ""}"#).unwrap();
        assert!(validate(&s).is_err());
    }
}
