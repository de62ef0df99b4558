//! Constants for configuring the application's security posture.
use std::{env::var, sync::LazyLock};

use super::{db::DATABASE_URL, env_flag, env_present, secrets::var_or_secret, split_list};

/// The fallback signing secret, only acceptable during development.
pub const INSECURE_SECRET_KEY: &str = "insecure-dev-only-change-in-production";

/// How long browsers should remember to only use HTTPS, in seconds.
pub const HSTS_SECONDS: u32 = 365 * 24 * 60 * 60;

/// The content security policy sent outside of debug mode.
pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'";

const DEFAULT_ALLOWED_HOSTS: &str = "ojasritu.co.in,www.ojasritu.co.in,*.railway.app";

/// Hosts that are always served so the application works out of the box.
const LOCAL_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

/// Forwarded host pattern used by GitHub Codespaces.
const CODESPACES_HOST: &str = "*.app.github.dev";

/// The application signing secret.
pub static SECRET_KEY: LazyLock<String> =
    LazyLock::new(|| var_or_secret("SECRET_KEY").unwrap_or_else(|| INSECURE_SECRET_KEY.to_owned()));

/// Whether the application runs in debug (development) mode.
pub static DEBUG: LazyLock<bool> = LazyLock::new(|| env_flag("DEBUG"));

/// Host header patterns the application will answer for.
pub static ALLOWED_HOSTS: LazyLock<Vec<String>> = LazyLock::new(|| {
    let codespaces =
        env_present("CODESPACE_NAME") || env_present("GITHUB_CODESPACES_PORT_FORWARDING_DOMAIN");
    allowed_hosts(var("ALLOWED_HOSTS").ok().as_deref(), codespaces)
});

/// Whether `X-Forwarded-Proto` from the fronting proxy decides the request scheme.
pub static TRUST_FORWARDED_PROTO: LazyLock<bool> = LazyLock::new(|| {
    trusts_forwarded_proto(
        env_present("RAILWAY_ENVIRONMENT"),
        env_present("CODESPACE_NAME"),
        &DATABASE_URL,
    )
});

/// Build the allowed host list from the configured value, always adding the
/// local development hosts.
pub fn allowed_hosts(configured: Option<&str>, codespaces: bool) -> Vec<String> {
    let mut hosts = split_list(configured.unwrap_or(DEFAULT_ALLOWED_HOSTS));
    hosts.extend(LOCAL_HOSTS.iter().map(|host| (*host).to_owned()));
    if codespaces {
        hosts.push(CODESPACES_HOST.to_owned());
    }
    hosts
}

/// Proxy headers are trusted on Railway and in Codespaces, both of which
/// terminate TLS in front of the application.
pub fn trusts_forwarded_proto(railway: bool, codespace: bool, database_url: &str) -> bool {
    railway || codespace || database_url.contains("railway")
}
