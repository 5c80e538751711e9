//! Dog record service HTTP library.
//!
//! Exposes config, state, router, and routes so the binary entrypoint and
//! the integration tests build the same application.

pub mod config;
pub mod router;
pub mod routes;
pub mod state;
