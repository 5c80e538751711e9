use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Greeting response payload.
#[derive(Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// GET / -- fixed greeting, doubles as a liveness probe.
async fn greeting() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World!",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}
