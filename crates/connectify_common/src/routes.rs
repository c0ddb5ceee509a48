// --- File: crates/connectify_common/src/routes.rs ---
use axum::{routing::get, Json, Router};

use crate::models::HealthStatus;

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Creates a router containing routes shared by every deployment (currently `/health`).
pub fn routes() -> Router {
    Router::new().route("/health", get(health_handler))
}
