//! Handlers for the `/dogs` route tree.
//!
//! The status-code contract is inherited from the service this replaces and
//! is reproduced exactly, quirks included: 204 doubles as "not found" on GET
//! and DELETE, a successful PATCH answers 201, and PATCH-time store failures
//! are masked as 204. Compatibility outranks tidiness here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Map, Value};

use dogsvc_core::types::DbId;
use dogsvc_core::validation::{invalid_keys, validate_create, UPDATE_KEYS};
use dogsvc_db::models::dog::CreateDog;
use dogsvc_db::store::StoreError;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(list_dogs).post(create_dog))
        .route(
            "/dogs/{id}",
            get(get_dog).delete(delete_dog).patch(update_dog),
        )
}

/// 400 with the fixed non-numeric-id message.
fn id_not_a_number() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "message": "id should be a number" })),
    )
        .into_response()
}

/// 400 with the collected validation messages.
fn validation_errors(errors: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
}

/// Payloads are validated key-by-key, so handlers take the body as a raw
/// JSON map. A non-object body is treated as having no keys.
fn as_object(body: Value) -> Map<String, Value> {
    match body {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// GET /dogs -- every dog, in insertion order.
async fn list_dogs(State(state): State<AppState>) -> Response {
    match state.store.list().await {
        Ok(dogs) => Json(dogs).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to list dogs");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /dogs/{id}
///
/// 400 for a non-numeric id, 204 when no such dog exists (contract quirk:
/// not-found is reported as "no content"), 200 with the record otherwise.
async fn get_dog(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<DbId>() else {
        return id_not_a_number();
    };

    match state.store.find(id).await {
        Ok(Some(dog)) => Json(dog).into_response(),
        Ok(None) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            tracing::error!(error = %err, id, "Failed to look up dog");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// DELETE /dogs/{id}
///
/// 400 for a non-numeric id. Any delete failure, including "no such row",
/// is swallowed and reported as 204; success answers 200 with the record's
/// prior state. Repeat deletes of the same id therefore settle on 204.
async fn delete_dog(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<DbId>() else {
        return id_not_a_number();
    };

    match state.store.delete(id).await {
        Ok(dog) => Json(dog).into_response(),
        Err(StoreError::NotFound(_)) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            tracing::warn!(error = %err, id, "Delete failed, reporting no content");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}

/// POST /dogs
///
/// Collects every validation error before answering 400. A clean payload is
/// inserted and answered with 201; store failures are logged and reported
/// as a bodyless 500.
async fn create_dog(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let body = as_object(body);

    let errors = validate_create(&body);
    if !errors.is_empty() {
        return validation_errors(errors);
    }

    // The payload passed validation, so this only fails if the validation
    // rules and the DTO drift apart.
    let input: CreateDog = match serde_json::from_value(Value::Object(body)) {
        Ok(input) => input,
        Err(err) => {
            tracing::error!(error = %err, "Validated payload failed to deserialize");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match state.store.create(&input).await {
        Ok(dog) => (StatusCode::CREATED, Json(dog)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to create dog");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// PATCH /dogs/{id}
///
/// Body keys are whitelist-checked; values are not type-checked here. A
/// wrong-typed value fails in the store and is masked as 204, matching the
/// old catch-all. The id is not pre-validated either: a non-numeric id can
/// never match a record and lands in the 404 branch. A successful update
/// answers 201.
async fn update_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let body = as_object(body);

    let errors = invalid_keys(&body, UPDATE_KEYS);
    if !errors.is_empty() {
        return validation_errors(errors);
    }

    let existing = match id.parse::<DbId>() {
        Ok(id) => match state.store.find(id).await {
            Ok(found) => found.map(|_| id),
            Err(err) => {
                tracing::warn!(error = %err, id, "Update lookup failed, reporting no content");
                return StatusCode::NO_CONTENT.into_response();
            }
        },
        Err(_) => None,
    };

    let Some(id) = existing else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Dog not found" })),
        )
            .into_response();
    };

    match state.store.update(id, &body).await {
        Ok(dog) => (StatusCode::CREATED, Json(dog)).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, id, "Update failed, reporting no content");
            StatusCode::NO_CONTENT.into_response()
        }
    }
}
