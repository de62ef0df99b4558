//! Middleware rejecting state-changing requests from untrusted browser origins.
use axum::{
    extract::{Request, State},
    http::{header::ORIGIN, Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::{state::AppState, utils::httperror::HttpError};

/// Methods that cannot change server state and are never checked.
const SAFE_METHODS: [Method; 4] = [Method::GET, Method::HEAD, Method::OPTIONS, Method::TRACE];

/// Reject unsafe requests whose `Origin` is present but not trusted. Requests
/// without an `Origin` (non-browser clients) pass through.
pub async fn csrf_origin_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    if SAFE_METHODS.contains(req.method()) {
        return Ok(next.run(req).await);
    }
    if let Some(origin) = req.headers().get(ORIGIN) {
        let trusted = origin.to_str().is_ok_and(|origin| {
            state
                .policy
                .csrf_trusted_origins
                .iter()
                .any(|trusted| trusted == origin)
        });
        if !trusted {
            tracing::warn!("CSRF origin check failed for {origin:?}");
            return Err(HttpError::new(
                StatusCode::FORBIDDEN,
                Some("CSRF origin check failed".to_owned()),
            ));
        }
    }
    Ok(next.run(req).await)
}
