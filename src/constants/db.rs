//! Database connection settings. The database itself belongs to the shop
//! backend; the URL is only inspected here to detect the hosting platform.
use std::{env::var, sync::LazyLock};

use super::paths::BASE_DIR;

/// The database connection string, defaulting to a local SQLite file.
pub static DATABASE_URL: LazyLock<String> = LazyLock::new(|| {
    var("DATABASE_URL")
        .unwrap_or_else(|_| format!("sqlite:///{}", BASE_DIR.join("db.sqlite3").display()))
});
