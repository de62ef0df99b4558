//! Health check used by the hosting platform's liveness probes.
use axum::{routing::get, Json, Router};

use crate::{
    services::health::{self, HealthReport},
    state::AppState,
};

/// Create a router answering on both `/healthz` and `/healthz/`.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/healthz/", get(health_check))
}

/// Report that the backend is alive.
async fn health_check() -> Json<HealthReport> {
    Json(health::report())
}
