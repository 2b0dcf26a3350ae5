//! Draft product persistence.
//!
//! `DraftProductStore` writes validated drafts into the persisted collection
//! with one read-modify-write per save. The collection is always written back
//! whole, so a failed write leaves the previous collection in place.

use storefront_types::error::{DraftStoreError, SubmitError};
use storefront_types::product::{DraftId, DraftProduct, SaveMode, SaveOutcome};

use crate::draft::validator;
use crate::storage::draft_repository::DraftRepository;

/// Service persisting drafts over an injected [`DraftRepository`].
pub struct DraftProductStore<R: DraftRepository> {
    repo: R,
}

impl<R: DraftRepository> DraftProductStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Persist `draft` according to `mode`.
    ///
    /// - Create: append. Fails with `DuplicateId` if the id is already stored.
    /// - Replace: drop entries with the same id, then append (upsert by id).
    ///
    /// Does not validate; callers check [`validator::validate`] first or use
    /// [`Self::validate_and_save`]. The draft is only borrowed, so on error
    /// the caller still holds it unchanged.
    pub async fn save(
        &self,
        draft: &DraftProduct,
        mode: SaveMode,
    ) -> Result<SaveOutcome, DraftStoreError> {
        let mut drafts = self.repo.load().await.map_err(|e| {
            tracing::error!(id = %draft.id, %mode, "failed to load draft collection: {e}");
            DraftStoreError::from(e)
        })?;

        match mode {
            SaveMode::Create => {
                if drafts.iter().any(|d| d.id == draft.id) {
                    tracing::warn!(id = %draft.id, "refusing to create duplicate draft");
                    return Err(DraftStoreError::DuplicateId(draft.id));
                }
            }
            SaveMode::Replace => drafts.retain(|d| d.id != draft.id),
        }
        drafts.push(draft.clone());

        self.repo.store(&drafts).await.map_err(|e| {
            tracing::error!(id = %draft.id, %mode, "failed to store draft collection: {e}");
            DraftStoreError::from(e)
        })?;

        tracing::info!(id = %draft.id, %mode, total = drafts.len(), "draft saved");

        Ok(SaveOutcome {
            id: draft.id,
            mode,
            total: drafts.len(),
        })
    }

    /// Validate, then save. Storage is not touched when any field fails.
    pub async fn validate_and_save(
        &self,
        draft: &DraftProduct,
        mode: SaveMode,
    ) -> Result<SaveOutcome, SubmitError> {
        let errors = validator::validate(draft);
        if !errors.is_empty() {
            let fields: Vec<&str> = errors.fields().iter().map(|f| f.key()).collect();
            tracing::warn!(id = %draft.id, ?fields, "draft failed validation");
            return Err(SubmitError::Invalid(errors));
        }

        Ok(self.save(draft, mode).await?)
    }

    /// All persisted drafts in stored order.
    pub async fn list(&self) -> Result<Vec<DraftProduct>, DraftStoreError> {
        Ok(self.repo.load().await?)
    }

    /// A persisted draft by id.
    pub async fn get(&self, id: DraftId) -> Result<Option<DraftProduct>, DraftStoreError> {
        let drafts = self.repo.load().await?;
        Ok(drafts.into_iter().find(|d| d.id == id))
    }
}
