//! Agency CRM API server library.
//!
//! Exposes the building blocks (config, state, error handling, router,
//! routes, seed routine) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod seed;
pub mod state;
