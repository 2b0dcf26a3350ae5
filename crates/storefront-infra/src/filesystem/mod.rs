//! Data directory layout for Storefront.
//!
//! Everything the CLI persists lives under one data directory:
//! `config.toml` and the SQLite database holding the key-value store.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `STOREFRONT_DATA_DIR` environment variable
/// 2. `~/.storefront`
/// 3. `./.storefront`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".storefront");
    }

    PathBuf::from(".storefront")
}

/// Path of `config.toml` inside the data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// SQLite connection URL for a database file in the data directory.
///
/// `mode=rwc` creates the file on first use.
pub fn database_url(data_dir: &Path, database_file: &str) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        data_dir.join(database_file).display()
    )
}
