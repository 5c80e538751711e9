//! Shared helpers for the HTTP integration tests.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use dogsvc_api::router::build_app_router;
use dogsvc_api::state::AppState;
use dogsvc_core::types::DbId;
use dogsvc_db::models::dog::{CreateDog, Dog};
use dogsvc_db::store::{DogStore, MemoryDogStore, StoreError};

/// Build the full application router over a fresh in-memory store.
///
/// Mirrors the router construction in `main.rs` so tests exercise the same
/// middleware stack (request ID, tracing, panic recovery) production uses.
pub fn build_test_app() -> Router {
    let state = AppState {
        store: Arc::new(MemoryDogStore::default()),
    };
    build_app_router(state)
}

/// Build the application router over a store whose every call fails.
pub fn build_failing_app() -> Router {
    let state = AppState {
        store: Arc::new(FailingDogStore),
    };
    build_app_router(state)
}

/// A [`DogStore`] where every operation fails with a database error, for
/// exercising the server-error branches of the handlers.
pub struct FailingDogStore;

impl FailingDogStore {
    fn error() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }
}

#[async_trait::async_trait]
impl DogStore for FailingDogStore {
    async fn list(&self) -> Result<Vec<Dog>, StoreError> {
        Err(Self::error())
    }

    async fn find(&self, _id: DbId) -> Result<Option<Dog>, StoreError> {
        Err(Self::error())
    }

    async fn create(&self, _input: &CreateDog) -> Result<Dog, StoreError> {
        Err(Self::error())
    }

    async fn update(
        &self,
        _id: DbId,
        _patch: &serde_json::Map<String, Value>,
    ) -> Result<Dog, StoreError> {
        Err(Self::error())
    }

    async fn delete(&self, _id: DbId) -> Result<Dog, StoreError> {
        Err(Self::error())
    }
}

/// Send a GET request to `uri`.
pub async fn get(app: &Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None).await
}

/// Send a DELETE request to `uri`.
pub async fn delete(app: &Router, uri: &str) -> Response {
    request(app, Method::DELETE, uri, None).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    request(app, Method::POST, uri, Some(body)).await
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(app: &Router, uri: &str, body: Value) -> Response {
    request(app, Method::PATCH, uri, Some(body)).await
}

async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request must build"),
        None => builder.body(Body::empty()).expect("request must build"),
    };
    app.clone()
        .oneshot(request)
        .await
        .expect("request must not fail at the transport level")
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).expect("response body must be JSON")
}

/// Collect a response body as raw bytes (for asserting empty bodies).
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes()
        .to_vec()
}
