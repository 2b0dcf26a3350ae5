//! Global configuration loader for Storefront.
//!
//! Reads `config.toml` from the data directory (`~/.storefront/` in production)
//! and deserializes it into [`StorefrontConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::Path;

use storefront_types::config::StorefrontConfig;

use crate::filesystem::config_path;

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`StorefrontConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_config(data_dir: &Path) -> StorefrontConfig {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", path.display());
            return StorefrontConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", path.display());
            return StorefrontConfig::default();
        }
    };

    match toml::from_str::<StorefrontConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Failed to parse {}: {err}, using defaults", path.display());
            StorefrontConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, StorefrontConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
storage_key = "seller-drafts"
enable_otel = true
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.storage_key, "seller-drafts");
        assert_eq!(config.database_file, "storefront.db");
        assert!(config.enable_otel);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, StorefrontConfig::default());
    }
}
