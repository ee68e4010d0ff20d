//! Domain types for the agency CRM backend.
//!
//! Each entity module defines the record shape (with serde defaults for
//! omitted optional fields), its collection name, and a side-effect-free
//! validation pass returning [`error::CoreError::Validation`] on the first
//! violation.

pub mod error;
pub mod lead;
pub mod project;
pub mod service;
pub mod testimonial;
