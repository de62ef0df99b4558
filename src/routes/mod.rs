//! HTTP routes within the application. Each module exposes a sub-router which
//! is merged or nested into the application router built here.
pub mod frontend;
pub mod health;
pub mod media;

use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method,
    },
    middleware::from_fn_with_state,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    constants::paths::{MEDIA_URL, STATIC_URL},
    middleware::{
        csrf::csrf_origin_middleware, hosts::allowed_hosts_middleware,
        security::security_middleware,
    },
    state::{AppState, SecurityPolicy},
    utils::httperror,
};

/// Assemble every route and the request policy layers into the application.
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.policy);
    Router::new()
        .merge(health::create_router())
        .merge(frontend::create_router())
        .nest(MEDIA_URL.trim_end_matches('/'), media::create_router())
        .nest_service(
            STATIC_URL.trim_end_matches('/'),
            ServeDir::new(state.static_root.as_path()),
        )
        .fallback(httperror::not_found)
        // Layers run bottom-up: the last one added sees the request first.
        .layer(from_fn_with_state(state.clone(), csrf_origin_middleware))
        .layer(cors)
        .layer(from_fn_with_state(state.clone(), security_middleware))
        .layer(from_fn_with_state(state.clone(), allowed_hosts_middleware))
        .layer(CatchPanicLayer::custom(httperror::server_error))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(policy: &SecurityPolicy) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allow_origin(&policy.cors_allowed_origins))
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-csrftoken"),
            HeaderName::from_static("x-requested-with"),
        ])
}

/// Credentialed CORS cannot answer with a literal `*`, so a wildcard entry
/// echoes the caller's origin instead.
fn allow_origin(configured: &[String]) -> AllowOrigin {
    if configured.iter().any(|origin| origin == "*") {
        tracing::warn!("CORS_ALLOWED_ORIGINS contains *, every origin will be allowed");
        return AllowOrigin::mirror_request();
    }
    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match HeaderValue::try_from(origin.as_str()) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}
