//! Google OAuth client configuration. The handshake itself is performed by the
//! account service; this layer only needs the public client id for the SPA.
use std::sync::LazyLock;

use super::{secrets::var_or_secret, security::DEBUG};

/// Scopes requested from Google during sign-in.
pub const GOOGLE_SCOPES: [&str; 2] = ["profile", "email"];

/// The public OAuth client id, if Google sign-in is enabled.
pub static GOOGLE_CLIENT_ID: LazyLock<Option<String>> =
    LazyLock::new(|| var_or_secret("GOOGLE_CLIENT_ID").filter(|id| !id.is_empty()));

/// The OAuth client secret, if provided.
pub static GOOGLE_CLIENT_SECRET: LazyLock<Option<String>> =
    LazyLock::new(|| var_or_secret("GOOGLE_CLIENT_SECRET").filter(|secret| !secret.is_empty()));

/// Where the frontend is hosted, which OAuth callbacks return to.
pub static FRONTEND_URL: LazyLock<&'static str> = LazyLock::new(|| {
    if *DEBUG {
        "http://localhost:5173"
    } else {
        "https://ojasritu.co.in"
    }
});
