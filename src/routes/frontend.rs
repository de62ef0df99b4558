//! The SPA entry point and favicon.
use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{
    constants::paths::{FAVICON_TARGET, LEGACY_WEB_URL},
    state::AppState,
};

/// Create a router for the application root and favicon.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/favicon.ico", get(favicon))
}

/// Serve the SPA entry document, or send the caller to the server-rendered
/// pages when no build is deployed.
async fn index(State(state): State<AppState>) -> Response {
    match state.frontend.load_index().await {
        Some(html) => Html(html).into_response(),
        None => {
            tracing::info!("No frontend build found, redirecting to {LEGACY_WEB_URL}");
            (StatusCode::FOUND, [(LOCATION, LEGACY_WEB_URL)]).into_response()
        }
    }
}

async fn favicon() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(LOCATION, FAVICON_TARGET)])
}
