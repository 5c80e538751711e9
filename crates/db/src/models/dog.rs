//! Dog model.

use dogsvc_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `dogs` table.
///
/// Serializes with camelCase keys (`isFavorite`) to match the wire format
/// of the service this replaces.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub age: f64,
    pub breed: Option<String>,
    pub is_favorite: bool,
}

/// DTO for creating a new dog.
///
/// Deserialized from a payload that already passed
/// [`dogsvc_core::validation::validate_create`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDog {
    pub name: String,
    pub description: String,
    pub age: f64,
    pub breed: Option<String>,
}
