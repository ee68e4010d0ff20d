//! Portfolio projects shown on the website.

use serde::{Deserialize, Serialize};

use crate::error::{require_non_empty, CoreError};

/// Collection name in the document store.
pub const COLLECTION: &str = "project";

/// A portfolio entry. Tag order is display-relevant and preserved as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub highlight: bool,
}

/// Validate the required project fields.
pub fn validate(project: &Project) -> Result<(), CoreError> {
    require_non_empty("Project", "title", &project.title)?;
    require_non_empty("Project", "description", &project.description)?;
    Ok(())
}
