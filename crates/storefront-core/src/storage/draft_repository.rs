//! Draft collection repository.
//!
//! The persisted state is one ordered collection of drafts. `DraftRepository`
//! reads and writes it whole; `KvDraftRepository` keeps it as a JSON array
//! under a single key of a [`KeyValueStore`].

use std::future::Future;

use storefront_types::config::DEFAULT_STORAGE_KEY;
use storefront_types::error::RepositoryError;
use storefront_types::product::DraftProduct;

use super::kv_store::KeyValueStore;

/// Persistence interface for the draft collection.
pub trait DraftRepository: Send + Sync {
    /// Load the full collection in persisted order.
    ///
    /// Returns an empty collection when nothing has been saved yet.
    fn load(&self) -> impl Future<Output = Result<Vec<DraftProduct>, RepositoryError>> + Send;

    /// Replace the persisted collection with `drafts` in one write.
    fn store(
        &self,
        drafts: &[DraftProduct],
    ) -> impl Future<Output = Result<(), RepositoryError>> + Send;
}

/// `DraftRepository` over a key-value store, one key for the whole collection.
pub struct KvDraftRepository<K: KeyValueStore> {
    kv: K,
    key: String,
}

impl<K: KeyValueStore> KvDraftRepository<K> {
    /// Repository under the default `myData` key.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<K: KeyValueStore> DraftRepository for KvDraftRepository<K> {
    async fn load(&self) -> Result<Vec<DraftProduct>, RepositoryError> {
        let raw = match self.kv.get(&self.key).await? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };

        // A corrupt value is surfaced, never replaced with an empty collection.
        let drafts: Vec<DraftProduct> = serde_json::from_str(&raw).map_err(|e| {
            RepositoryError::Serialization(format!("invalid draft collection under '{}': {e}", self.key))
        })?;

        tracing::debug!(key = %self.key, count = drafts.len(), "loaded draft collection");
        Ok(drafts)
    }

    async fn store(&self, drafts: &[DraftProduct]) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(drafts)
            .map_err(|e| RepositoryError::Serialization(format!("failed to serialize drafts: {e}")))?;

        self.kv.set(&self.key, &raw).await?;

        tracing::debug!(key = %self.key, count = drafts.len(), "stored draft collection");
        Ok(())
    }
}
