//! In-memory [`DogStore`].
//!
//! Backs the HTTP integration tests so the full route contract can be
//! exercised without a running PostgreSQL instance.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::{Map, Value};

use dogsvc_core::types::DbId;

use super::{apply_patch, DogStore, StoreError};
use crate::models::dog::{CreateDog, Dog};

/// Stores dog records in a mutex-guarded map, assigning ids sequentially
/// from 1.
#[derive(Debug, Default)]
pub struct MemoryDogStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: DbId,
    dogs: BTreeMap<DbId, Dog>,
}

impl MemoryDogStore {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().expect("dog store mutex poisoned")
    }
}

#[async_trait]
impl DogStore for MemoryDogStore {
    async fn list(&self) -> Result<Vec<Dog>, StoreError> {
        // Ids are assigned in increasing order, so key order is insertion
        // order.
        Ok(self.lock().dogs.values().cloned().collect())
    }

    async fn find(&self, id: DbId) -> Result<Option<Dog>, StoreError> {
        Ok(self.lock().dogs.get(&id).cloned())
    }

    async fn create(&self, input: &CreateDog) -> Result<Dog, StoreError> {
        let mut inner = self.lock();
        inner.next_id += 1;
        let dog = Dog {
            id: inner.next_id,
            name: input.name.clone(),
            description: input.description.clone(),
            age: input.age,
            breed: input.breed.clone(),
            is_favorite: false,
        };
        inner.dogs.insert(dog.id, dog.clone());
        Ok(dog)
    }

    async fn update(&self, id: DbId, patch: &Map<String, Value>) -> Result<Dog, StoreError> {
        let mut inner = self.lock();
        let dog = inner.dogs.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        // Merge into a copy first so a rejected value leaves the stored
        // record untouched.
        let mut updated = dog.clone();
        apply_patch(&mut updated, patch)?;
        *dog = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: DbId) -> Result<Dog, StoreError> {
        self.lock().dogs.remove(&id).ok_or(StoreError::NotFound(id))
    }
}
