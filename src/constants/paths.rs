//! Filesystem locations and URL prefixes for served files.
use std::{
    env::{current_dir, var},
    path::PathBuf,
    sync::LazyLock,
};

/// The URL prefix media files are served under.
pub const MEDIA_URL: &str = "/media/";

/// The URL prefix static assets are served under.
pub const STATIC_URL: &str = "/static/";

/// Where `/favicon.ico` permanently redirects to.
pub const FAVICON_TARGET: &str = "/static/images/logo.png";

/// The server-rendered page set used when no SPA build is available.
pub const LEGACY_WEB_URL: &str = "/web/";

/// The directory every other path is resolved against.
pub static BASE_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    var("BASE_DIR")
        .map(PathBuf::from)
        .or_else(|_| current_dir())
        .unwrap_or_else(|_| PathBuf::from("."))
});

/// The directory uploaded and published media lives under.
pub static MEDIA_ROOT: LazyLock<PathBuf> = LazyLock::new(|| BASE_DIR.join("media"));

/// The directory collected static assets live under.
pub static STATIC_ROOT: LazyLock<PathBuf> = LazyLock::new(|| BASE_DIR.join("staticfiles"));

/// Candidate SPA entry documents, in priority order.
pub static FRONTEND_INDEX_CANDIDATES: LazyLock<Vec<PathBuf>> = LazyLock::new(|| {
    vec![
        BASE_DIR.join("frontend").join("dist").join("index.html"),
        STATIC_ROOT.join("frontend").join("index.html"),
    ]
});
