//! The [`DogStore`] trait and its implementations.

mod memory;
mod postgres;

pub use memory::MemoryDogStore;
pub use postgres::PgDogStore;

use async_trait::async_trait;
use serde_json::{Map, Value};

use dogsvc_core::types::DbId;

use crate::models::dog::{CreateDog, Dog};

/// Errors surfaced by a [`DogStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no dog with id {0}")]
    NotFound(DbId),

    #[error("invalid value for field '{0}'")]
    InvalidField(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations for dog records.
///
/// Injected into the handler set as a trait object, so the HTTP layer stays
/// independent of the concrete backend (PostgreSQL in production, in-memory
/// in the integration tests).
#[async_trait]
pub trait DogStore: Send + Sync {
    /// All dogs, in insertion order.
    async fn list(&self) -> Result<Vec<Dog>, StoreError>;

    /// A single dog by id, `None` if absent.
    async fn find(&self, id: DbId) -> Result<Option<Dog>, StoreError>;

    /// Insert a new dog, returning the stored row with its assigned id.
    async fn create(&self, input: &CreateDog) -> Result<Dog, StoreError>;

    /// Apply a raw patch payload to an existing dog.
    ///
    /// Keys must already be whitelist-checked. Values are coerced here; a
    /// wrong-typed value fails with [`StoreError::InvalidField`].
    async fn update(&self, id: DbId, patch: &Map<String, Value>) -> Result<Dog, StoreError>;

    /// Delete a dog, returning its prior state.
    async fn delete(&self, id: DbId) -> Result<Dog, StoreError>;
}

/// Merge a whitelisted patch payload into `dog`, coercing JSON values to
/// the field types.
pub(crate) fn apply_patch(dog: &mut Dog, patch: &Map<String, Value>) -> Result<(), StoreError> {
    for (key, value) in patch {
        match key.as_str() {
            "name" => {
                dog.name = value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| StoreError::InvalidField("name".into()))?;
            }
            "description" => {
                dog.description = value
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| StoreError::InvalidField("description".into()))?;
            }
            "age" => {
                dog.age = value
                    .as_f64()
                    .ok_or_else(|| StoreError::InvalidField("age".into()))?;
            }
            "breed" => {
                dog.breed = match value {
                    Value::Null => None,
                    Value::String(breed) => Some(breed.clone()),
                    _ => return Err(StoreError::InvalidField("breed".into())),
                };
            }
            other => return Err(StoreError::InvalidField(other.to_string())),
        }
    }
    Ok(())
}
