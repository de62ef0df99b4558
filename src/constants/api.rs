//! Constants related to the general configuration of the entire API and its deployment.

use std::{env::var, sync::LazyLock};

/// The project name reported by the health check.
pub const PROJECT_NAME: &str = "Ojasritu Wellness";

/// The status string reported by the health check while the process is alive.
pub const HEALTH_STATUS: &str = "Backend running successfully";

/// The address the HTTP listener binds to.
pub static LISTEN_ADDRESS: LazyLock<String> = LazyLock::new(|| {
    let host = var("HOST").unwrap_or_else(|_| String::from("0.0.0.0"));
    let port = var("PORT").unwrap_or_else(|_| String::from("8000"));
    format!("{host}:{port}")
});
