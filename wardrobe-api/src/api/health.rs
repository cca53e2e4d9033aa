//! Liveness check for wardrobe-api
//!
//! Answers without touching the database, so it reports the process only.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Body of `GET /health`; `module` is always `wardrobe-api`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Always `ok` while the server is accepting requests.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "wardrobe-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `/health`, mounted outside the `/api` routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
