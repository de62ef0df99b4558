//! Edge service for the Ojasritu Wellness shop.
mod constants;
mod middleware;
mod routes;
mod services;
mod state;
mod utils;

use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use constants::{api, oauth, paths, security};
use state::AppState;

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    log_configuration();
    let state = AppState::from_env();
    let app = routes::create_app(state);

    let listener = TcpListener::bind(api::LISTEN_ADDRESS.as_str())
        .await
        .expect("Failed to bind listener");
    info!("Listening on {}", *api::LISTEN_ADDRESS);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to init Axum service");
    info!("Server shut down");
}

/// Report the effective configuration and flag insecure combinations.
fn log_configuration() {
    info!(
        debug = *security::DEBUG,
        trust_forwarded_proto = *security::TRUST_FORWARDED_PROTO,
        allowed_hosts = ?security::ALLOWED_HOSTS.as_slice(),
        "Loaded security configuration"
    );
    info!(
        media_root = %paths::MEDIA_ROOT.display(),
        static_root = %paths::STATIC_ROOT.display(),
        "Serving files"
    );
    if !*security::DEBUG && security::SECRET_KEY.as_str() == security::INSECURE_SECRET_KEY {
        warn!("SECRET_KEY is not set; the development key must not be used in production");
    }
    match (oauth::GOOGLE_CLIENT_ID.is_some(), oauth::GOOGLE_CLIENT_SECRET.is_some()) {
        (true, true) => info!(
            frontend_url = *oauth::FRONTEND_URL,
            scopes = ?oauth::GOOGLE_SCOPES,
            "Google sign-in enabled"
        ),
        (true, false) => warn!("GOOGLE_CLIENT_ID is set without GOOGLE_CLIENT_SECRET"),
        (false, _) => info!("Google sign-in disabled"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
