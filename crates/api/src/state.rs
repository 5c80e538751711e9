use std::sync::Arc;

use dogsvc_db::store::DogStore;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Cheaply cloneable. The store is a trait object so the binary can inject
/// the PostgreSQL backend while tests inject an in-memory one.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend for dog records.
    pub store: Arc<dyn DogStore>,
}
