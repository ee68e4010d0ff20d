//! Lead entity: prospective-client inquiries captured from the public
//! contact form.
//!
//! Leads are insert-only in this service. Status changes happen in an
//! external admin tool, so `status` is stored as a free-form string with a
//! conventional vocabulary rather than an enforced closed set.

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::error::{require_non_empty, CoreError};

/// Collection name in the document store.
pub const COLLECTION: &str = "lead";

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly captured lead.
pub const STATUS_NEW: &str = "new";
/// The lead has been contacted.
pub const STATUS_CONTACTED: &str = "contacted";
/// The lead has been qualified as a real opportunity.
pub const STATUS_QUALIFIED: &str = "qualified";
/// A proposal has been sent.
pub const STATUS_PROPOSAL: &str = "proposal";
/// The deal was won.
pub const STATUS_WON: &str = "won";
/// The deal was lost.
pub const STATUS_LOST: &str = "lost";

/// Conventional lead statuses. Deliberately NOT enforced on input: the set
/// is open-ended and owned by the external admin tooling.
pub const CONVENTIONAL_STATUSES: &[&str] = &[
    STATUS_NEW,
    STATUS_CONTACTED,
    STATUS_QUALIFIED,
    STATUS_PROPOSAL,
    STATUS_WON,
    STATUS_LOST,
];

// ---------------------------------------------------------------------------
// Record shape
// ---------------------------------------------------------------------------

fn default_source() -> String {
    "website".to_string()
}

fn default_status() -> String {
    STATUS_NEW.to_string()
}

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Estimated budget range, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    /// Service the prospect is interested in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Lead source identifier (default `"website"`).
    #[serde(default = "default_source")]
    pub source: String,
    /// Lead status (default `"new"`, see [`CONVENTIONAL_STATUSES`]).
    #[serde(default = "default_status")]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a lead before it is written to the store.
///
/// Checks that the required fields are non-empty and that `email` is
/// syntactically valid. Must be called before any store write so a rejected
/// lead never reaches the database.
pub fn validate(lead: &Lead) -> Result<(), CoreError> {
    require_non_empty("Lead", "name", &lead.name)?;
    require_non_empty("Lead", "email", &lead.email)?;
    if !lead.email.validate_email() {
        return Err(CoreError::Validation {
            entity: "Lead",
            field: "email",
            reason: format!("'{}' is not a valid email address", lead.email),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_lead() -> Lead {
        serde_json::from_str(r#"{"name": "Ava Patel", "email": "ava@nimbus.dev"}"#).unwrap()
    }

    #[test]
    fn defaults_are_applied_on_deserialization() {
        let lead = minimal_lead();
        assert_eq!(lead.source, "website");
        assert_eq!(lead.status, STATUS_NEW);
        assert_eq!(lead.company, None);
        assert_eq!(lead.message, None);
    }

    #[test]
    fn minimal_lead_is_valid() {
        assert!(validate(&minimal_lead()).is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut lead = minimal_lead();
        lead.name = "  ".to_string();
        assert!(validate(&lead).is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        for email in ["not-an-email", "missing@tld@twice", "", "a b@c.dev"] {
            let mut lead = minimal_lead();
            lead.email = email.to_string();
            assert!(validate(&lead).is_err(), "'{email}' should be rejected");
        }
    }

    #[test]
    fn unconventional_status_is_allowed() {
        // The status vocabulary is open-ended; validation must not close it.
        let mut lead = minimal_lead();
        lead.status = "nurturing".to_string();
        assert!(validate(&lead).is_ok());
    }

    #[test]
    fn none_fields_are_omitted_from_documents() {
        let value = serde_json::to_value(minimal_lead()).unwrap();
        assert!(value.get("company").is_none());
        assert_eq!(value["source"], "website");
    }
}
