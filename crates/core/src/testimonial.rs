//! Client testimonials shown on the website.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_empty, CoreError};

/// Collection name in the document store.
pub const COLLECTION: &str = "testimonial";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

pub fn validate(testimonial: &Testimonial) -> Result<(), CoreError> {
    require_non_empty("Testimonial", "name", &testimonial.name)?;
    require_non_empty("Testimonial", "quote", &testimonial.quote)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_is_required() {
        let t: Testimonial =
            serde_json::from_str(r#"{"name": "Ava", "quote": ""}"#).unwrap();
        assert!(validate(&t).is_err());
    }

    #[test]
    fn role_and_avatar_are_optional() {
        let t: Testimonial =
            serde_json::from_str(r#"{"name": "Ava", "quote": "Great work"}"#).unwrap();
        assert_eq!(t.role, None);
        assert_eq!(t.avatar, None);
        assert!(validate(&t).is_ok());
    }
}
