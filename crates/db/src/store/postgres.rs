//! PostgreSQL-backed [`DogStore`].

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;

use dogsvc_core::types::DbId;

use super::{apply_patch, DogStore, StoreError};
use crate::models::dog::{CreateDog, Dog};

/// Column list for dogs queries.
const COLUMNS: &str = "id, name, description, age, breed, is_favorite";

/// Stores dog records in the `dogs` table.
#[derive(Clone)]
pub struct PgDogStore {
    pool: PgPool,
}

impl PgDogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogStore for PgDogStore {
    async fn list(&self) -> Result<Vec<Dog>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dogs ORDER BY id ASC");
        Ok(sqlx::query_as::<_, Dog>(&query).fetch_all(&self.pool).await?)
    }

    async fn find(&self, id: DbId) -> Result<Option<Dog>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        Ok(sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn create(&self, input: &CreateDog) -> Result<Dog, StoreError> {
        let query = format!(
            "INSERT INTO dogs (name, description, age, breed)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        Ok(sqlx::query_as::<_, Dog>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.age)
            .bind(&input.breed)
            .fetch_one(&self.pool)
            .await?)
    }

    async fn update(&self, id: DbId, patch: &Map<String, Value>) -> Result<Dog, StoreError> {
        // Read-merge-write keeps value coercion in one place (`apply_patch`)
        // and the UPDATE statement static.
        let mut dog = self.find(id).await?.ok_or(StoreError::NotFound(id))?;
        apply_patch(&mut dog, patch)?;

        let query = format!(
            "UPDATE dogs SET name = $2, description = $3, age = $4, breed = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .bind(&dog.name)
            .bind(&dog.description)
            .bind(dog.age)
            .bind(&dog.breed)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: DbId) -> Result<Dog, StoreError> {
        let query = format!("DELETE FROM dogs WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Dog>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))
    }
}
