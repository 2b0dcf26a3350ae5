//! Add/edit-product editing session.
//!
//! A `DraftEditor` owns the draft being composed, applies typed field updates
//! and remembers the errors from the last validation so they can be shown
//! inline. Nothing is persisted until [`DraftEditor::submit`]; dropping the
//! editor abandons the draft.

use storefront_types::error::SubmitError;
use storefront_types::product::{DraftProduct, MediaItem, SaveMode, SaveOutcome};
use storefront_types::validation::ValidationErrors;

use crate::draft::store::DraftProductStore;
use crate::draft::validator;
use crate::storage::draft_repository::DraftRepository;

/// One field change made on the add-product form.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftUpdate {
    SetImage(Option<String>),
    SetVideo(Option<String>),
    AddMedia(MediaItem),
    /// Remove the additional media item at this index; out of range is a no-op.
    RemoveMedia(usize),
    SetName(String),
    SetDescription(String),
    SetConditionDescription(String),
    SetBrand(String),
    SetCondition(String),
    SetPrimaryMaterial(String),
    SetPrimaryColor(String),
    SetOccasion(String),
    ToggleCategory(String),
    SetCategories(Vec<String>),
    SetOriginalPrice(String),
    SetDiscountedPrice(String),
    SetPieceCount(String),
}

/// In-memory state of one add/edit-product session.
#[derive(Debug, Clone)]
pub struct DraftEditor {
    draft: DraftProduct,
    mode: SaveMode,
    errors: ValidationErrors,
}

impl DraftEditor {
    /// Start composing a new listing with a fresh id.
    pub fn new() -> Self {
        Self {
            draft: DraftProduct::new(),
            mode: SaveMode::Create,
            errors: ValidationErrors::new(),
        }
    }

    /// Edit a listing that is already persisted; saves replace it by id.
    pub fn edit(existing: DraftProduct) -> Self {
        Self {
            draft: existing,
            mode: SaveMode::Replace,
            errors: ValidationErrors::new(),
        }
    }

    pub fn draft(&self) -> &DraftProduct {
        &self.draft
    }

    pub fn mode(&self) -> SaveMode {
        self.mode
    }

    /// Errors from the most recent validation.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn action_label(&self) -> &'static str {
        self.mode.action_label()
    }

    pub fn into_draft(self) -> DraftProduct {
        self.draft
    }

    pub fn apply(&mut self, update: DraftUpdate) {
        let d = &mut self.draft;
        match update {
            DraftUpdate::SetImage(uri) => d.image = uri,
            DraftUpdate::SetVideo(uri) => d.video = uri,
            DraftUpdate::AddMedia(item) => d.media_files.push(item),
            DraftUpdate::RemoveMedia(index) => {
                if index < d.media_files.len() {
                    d.media_files.remove(index);
                }
            }
            DraftUpdate::SetName(v) => d.name = v,
            DraftUpdate::SetDescription(v) => d.description = v,
            DraftUpdate::SetConditionDescription(v) => d.condition_description = v,
            DraftUpdate::SetBrand(v) => d.brand = v,
            DraftUpdate::SetCondition(v) => d.condition = v,
            DraftUpdate::SetPrimaryMaterial(v) => d.primary_material = v,
            DraftUpdate::SetPrimaryColor(v) => d.primary_color = v,
            DraftUpdate::SetOccasion(v) => d.occasion = v,
            DraftUpdate::ToggleCategory(label) => d.toggle_category(&label),
            DraftUpdate::SetCategories(labels) => d.set_categories(labels),
            DraftUpdate::SetOriginalPrice(v) => d.original_price = v,
            DraftUpdate::SetDiscountedPrice(v) => d.discounted_price = v,
            DraftUpdate::SetPieceCount(v) => d.piece_count = v,
        }
    }

    /// Re-run validation and keep the result for display. Returns true when
    /// the draft can be saved.
    pub fn validate(&mut self) -> bool {
        self.errors = validator::validate(&self.draft);
        self.errors.is_empty()
    }

    /// Validate and, if clean, persist the draft.
    ///
    /// On failure the draft is left exactly as it was so the seller can retry.
    /// After the first successful create the session edits the stored entry,
    /// so submitting again replaces it instead of adding a duplicate.
    pub async fn submit<R: DraftRepository>(
        &mut self,
        store: &DraftProductStore<R>,
    ) -> Result<SaveOutcome, SubmitError> {
        if !self.validate() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        let outcome = store.save(&self.draft, self.mode).await?;
        self.mode = SaveMode::Replace;
        Ok(outcome)
    }
}

impl Default for DraftEditor {
    fn default() -> Self {
        Self::new()
    }
}
