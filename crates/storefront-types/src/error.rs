use thiserror::Error;

use crate::product::DraftId;
use crate::validation::ValidationErrors;

/// Alert text shown to the seller when a save cannot be completed.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save product.";

/// Errors from repository operations (used by trait definitions in storefront-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("storage connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Errors raised while loading or saving the draft collection.
///
/// Every variant surfaces as one alert; the seller keeps the in-memory draft.
#[derive(Debug, Error)]
pub enum DraftStoreError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("corrupt draft collection: {0}")]
    Serialization(String),

    #[error("a draft with id {0} already exists")]
    DuplicateId(DraftId),
}

impl DraftStoreError {
    pub fn user_message(&self) -> &'static str {
        SAVE_FAILED_MESSAGE
    }
}

impl From<RepositoryError> for DraftStoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serialization(msg) => DraftStoreError::Serialization(msg),
            other => DraftStoreError::Storage(other.to_string()),
        }
    }
}

/// Errors from submitting an editing session.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("draft has invalid fields: {0}")]
    Invalid(ValidationErrors),

    #[error("failed to save product: {0}")]
    Storage(#[from] DraftStoreError),
}
