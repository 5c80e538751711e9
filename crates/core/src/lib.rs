//! Domain types and validation rules for the dog record service.

pub mod types;
pub mod validation;
