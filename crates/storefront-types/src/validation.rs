//! Field-level validation results for draft products.

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;

/// A required field of the add-product form.
///
/// Declaration order is the order errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Image,
    Name,
    Brand,
    Categories,
    OriginalPrice,
    DiscountedPrice,
    PieceCount,
    Condition,
}

impl DraftField {
    pub const ALL: [DraftField; 8] = [
        DraftField::Image,
        DraftField::Name,
        DraftField::Brand,
        DraftField::Categories,
        DraftField::OriginalPrice,
        DraftField::DiscountedPrice,
        DraftField::PieceCount,
        DraftField::Condition,
    ];

    /// Key used when reporting errors (e.g. `pieceCount`).
    pub fn key(&self) -> &'static str {
        match self {
            DraftField::Image => "image",
            DraftField::Name => "name",
            DraftField::Brand => "brand",
            DraftField::Categories => "categories",
            DraftField::OriginalPrice => "originalPrice",
            DraftField::DiscountedPrice => "discountedPrice",
            DraftField::PieceCount => "pieceCount",
            DraftField::Condition => "condition",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Mapping from failing field to its inline error message.
///
/// Empty means the draft may be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<DraftField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: DraftField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: DraftField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: DraftField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failing fields in declaration order.
    pub fn fields(&self) -> Vec<DraftField> {
        self.0.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_serialize_as_keyed_object() {
        let mut errors = ValidationErrors::new();
        errors.insert(DraftField::PieceCount, "Please enter a valid number of pieces.");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"pieceCount":"Please enter a valid number of pieces."}"#);
    }

    #[test]
    fn test_fields_follow_declaration_order() {
        let mut errors = ValidationErrors::new();
        errors.insert(DraftField::Condition, "c");
        errors.insert(DraftField::Image, "i");
        errors.insert(DraftField::OriginalPrice, "o");
        assert_eq!(
            errors.fields(),
            vec![DraftField::Image, DraftField::OriginalPrice, DraftField::Condition]
        );
    }

    #[test]
    fn test_display() {
        let mut errors = ValidationErrors::new();
        errors.insert(DraftField::Name, "Please enter a product name.");
        errors.insert(DraftField::Brand, "Please select a brand.");
        assert_eq!(
            errors.to_string(),
            "name: Please enter a product name.; brand: Please select a brand."
        );
    }

    #[test]
    fn test_field_keys_match_serde_names() {
        for field in DraftField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.key()));
        }
    }
}
