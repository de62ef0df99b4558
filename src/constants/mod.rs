//! Constants (primary environment variables/secrets) used across the application.
//!
//! Every value here is read once, on first access, and never re-read.
pub mod api;
pub mod cors;
pub mod db;
pub mod oauth;
pub mod paths;
mod secrets;
pub mod security;

use std::env::var;

/// Whether an environment flag holds a truthy value (`1`, `true` or `yes`).
pub fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Read a boolean flag from the environment, treating absence as `false`.
pub fn env_flag(key: &str) -> bool {
    var(key).is_ok_and(|value| is_truthy(&value))
}

/// Whether an environment variable is set to anything non-empty.
pub fn env_present(key: &str) -> bool {
    var(key).is_ok_and(|value| !value.is_empty())
}

/// Split a comma separated list, trimming entries and dropping empty ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_owned)
        .collect()
}
