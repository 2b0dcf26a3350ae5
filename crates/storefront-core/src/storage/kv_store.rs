//! Key-value store trait.
//!
//! Defines the device storage boundary: string values under string keys.
//! Implementations live in storefront-infra.

use storefront_types::error::RepositoryError;

/// Trait for persistent string key-value storage.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key. Returns None if the key does not exist.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send;

    /// Set the value for a key (upsert). The write is complete when the
    /// future resolves.
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}

impl<T: KeyValueStore> KeyValueStore for std::sync::Arc<T> {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>, RepositoryError>> + Send {
        (**self).get(key)
    }

    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send {
        (**self).set(key, value)
    }
}
