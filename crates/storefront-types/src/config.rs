//! Global configuration types for Storefront.
//!
//! `StorefrontConfig` represents the top-level `config.toml` in the data
//! directory. It controls where drafts are persisted and whether traces are
//! exported.

use serde::{Deserialize, Serialize};

/// Key the draft collection has always been stored under on device.
pub const DEFAULT_STORAGE_KEY: &str = "myData";

/// Top-level configuration.
///
/// Loaded from `~/.storefront/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Key holding the JSON-serialized draft collection.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// SQLite database file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,

    /// Export tracing spans through OpenTelemetry.
    #[serde(default)]
    pub enable_otel: bool,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_database_file() -> String {
    "storefront.db".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            database_file: default_database_file(),
            enable_otel: false,
        }
    }
}
