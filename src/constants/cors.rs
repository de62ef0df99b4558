//! Cross-origin policy: which browser origins may call the API with
//! credentials, and which may submit state-changing requests.
use std::{env::var, sync::LazyLock};

use super::split_list;

const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:5173,\
    http://127.0.0.1:5173,\
    https://ojasritu.co.in,\
    https://www.ojasritu.co.in,\
    https://urban-spoon-jjprx45wrjpvhjqwv.github.dev";

const DEFAULT_CSRF_TRUSTED_ORIGINS: &str = "http://localhost:8000,\
    http://127.0.0.1:8000,\
    http://localhost:5173,\
    http://127.0.0.1:5173,\
    https://ojasritu.co.in,\
    https://www.ojasritu.co.in,\
    https://urban-spoon-jjprx45wrjpvhjqwv.github.dev/";

/// Origins allowed to make credentialed cross-origin requests.
pub static CORS_ALLOWED_ORIGINS: LazyLock<Vec<String>> = LazyLock::new(|| {
    split_list(
        &var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGINS.to_owned()),
    )
});

/// Origins trusted to send unsafe (state-changing) requests.
pub static CSRF_TRUSTED_ORIGINS: LazyLock<Vec<String>> = LazyLock::new(|| {
    normalize_origins(&split_list(
        &var("CSRF_TRUSTED_ORIGINS").unwrap_or_else(|_| DEFAULT_CSRF_TRUSTED_ORIGINS.to_owned()),
    ))
});

/// Strip trailing slashes and drop duplicates, keeping first-seen order.
/// Browsers never send a trailing slash in `Origin`.
pub fn normalize_origins(origins: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(origins.len());
    for origin in origins {
        let origin = origin.trim_end_matches('/').to_owned();
        if !normalized.contains(&origin) {
            normalized.push(origin);
        }
    }
    normalized
}
