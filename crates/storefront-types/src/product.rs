//! Draft product types.
//!
//! A `DraftProduct` is one in-progress or saved product listing from the
//! creator store. The serde layout matches the JSON array kept on device, so
//! collections written by earlier app versions load unchanged.

use chrono::Utc;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI64, Ordering};

/// Last id handed out by [`DraftId::generate`] in this process.
static LAST_ISSUED_ID: AtomicI64 = AtomicI64::new(0);

/// Identity of a draft: milliseconds since the Unix epoch at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DraftId(pub i64);

impl DraftId {
    /// Generate a fresh id from the current timestamp.
    ///
    /// Ids are strictly increasing within the process: two drafts created in
    /// the same millisecond still get distinct ids.
    pub fn generate() -> Self {
        let now = Utc::now().timestamp_millis();
        let mut last = LAST_ISSUED_ID.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match LAST_ISSUED_ID.compare_exchange_weak(
                last,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Self(next),
                Err(actual) => last = actual,
            }
        }
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DraftId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

// Older collections sometimes carry the id as a string; both forms compare
// equal once loaded.
impl<'de> Deserialize<'de> for DraftId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Float(f64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Int(v) => Ok(Self(v)),
            RawId::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                Ok(Self(v as i64))
            }
            RawId::Float(v) => Err(D::Error::custom(format!("invalid draft id: {v}"))),
            RawId::Text(s) => s
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid draft id: '{s}'"))),
        }
    }
}

/// Kind of an additional media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a picked asset by its reported MIME/asset type.
    ///
    /// Anything that does not mention "video" is treated as an image.
    pub fn from_asset_type(asset_type: Option<&str>) -> Self {
        match asset_type {
            Some(t) if t.contains("video") => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// An additional photo or video attached to a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Local file reference returned by the media picker.
    pub uri: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl MediaItem {
    pub fn image(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            kind: MediaKind::Image,
        }
    }

    pub fn video(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            kind: MediaKind::Video,
        }
    }
}

/// A product listing being composed in the creator store.
///
/// Prices and piece count are kept exactly as typed; the validator decides
/// whether they are numeric. Categorical fields hold the selected label, or an
/// empty string when nothing is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftProduct {
    pub id: DraftId,
    /// Primary photo.
    #[serde(default)]
    pub image: Option<String>,
    /// Primary video (reel).
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default, rename = "mediaFiles")]
    pub media_files: Vec<MediaItem>,
    #[serde(default, rename = "productName")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "conditionDescription")]
    pub condition_description: String,
    #[serde(default, rename = "selectedBrand")]
    pub brand: String,
    /// Selected category labels, in selection order, without duplicates.
    #[serde(default, rename = "selectedCategory")]
    pub categories: Vec<String>,
    #[serde(default, rename = "selectedProductCondition")]
    pub condition: String,
    #[serde(default, rename = "selectedPrimaryMaterial")]
    pub primary_material: String,
    #[serde(default, rename = "selectedPrimaryColor")]
    pub primary_color: String,
    #[serde(default, rename = "selectedOccasion")]
    pub occasion: String,
    #[serde(default, rename = "originalPrice")]
    pub original_price: String,
    #[serde(default, rename = "discountedPrice")]
    pub discounted_price: String,
    #[serde(default, rename = "pieces")]
    pub piece_count: String,
}

impl DraftProduct {
    /// A blank draft with a freshly generated id.
    pub fn new() -> Self {
        Self::with_id(DraftId::generate())
    }

    /// A blank draft with a caller-chosen id.
    pub fn with_id(id: DraftId) -> Self {
        Self {
            id,
            image: None,
            video: None,
            media_files: Vec::new(),
            name: String::new(),
            description: String::new(),
            condition_description: String::new(),
            brand: String::new(),
            categories: Vec::new(),
            condition: String::new(),
            primary_material: String::new(),
            primary_color: String::new(),
            occasion: String::new(),
            original_price: String::new(),
            discounted_price: String::new(),
            piece_count: String::new(),
        }
    }

    /// Add `label` if it is not selected, remove it if it is.
    pub fn toggle_category(&mut self, label: &str) {
        if let Some(pos) = self.categories.iter().position(|c| c == label) {
            self.categories.remove(pos);
        } else {
            self.categories.push(label.to_string());
        }
    }

    /// Replace the selected categories, keeping the first occurrence of each.
    pub fn set_categories(&mut self, labels: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(labels.len());
        for label in labels {
            if !unique.contains(&label) {
                unique.push(label);
            }
        }
        self.categories = unique;
    }

    /// Number of media references attached (primary photo, reel, extras).
    pub fn media_count(&self) -> usize {
        usize::from(self.image.is_some()) + usize::from(self.video.is_some()) + self.media_files.len()
    }
}

impl Default for DraftProduct {
    fn default() -> Self {
        Self::new()
    }
}

/// How a validated draft is written into the persisted collection.
///
/// - Create: append as a new entry
/// - Replace: drop any entry with the same id, then append
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveMode {
    Create,
    Replace,
}

impl SaveMode {
    /// Confirmation shown to the seller after a successful save.
    pub fn success_message(&self) -> &'static str {
        match self {
            SaveMode::Create => "Product added successfully.",
            SaveMode::Replace => "Product updated successfully.",
        }
    }

    /// Label of the primary action button for this mode.
    pub fn action_label(&self) -> &'static str {
        match self {
            SaveMode::Create => "PUBLISH",
            SaveMode::Replace => "SAVE CHANGES",
        }
    }
}

impl fmt::Display for SaveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveMode::Create => write!(f, "create"),
            SaveMode::Replace => write!(f, "replace"),
        }
    }
}

impl FromStr for SaveMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(SaveMode::Create),
            "replace" => Ok(SaveMode::Replace),
            other => Err(format!("invalid save mode: '{other}'")),
        }
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub id: DraftId,
    pub mode: SaveMode,
    /// Size of the persisted collection after the write.
    pub total: usize,
}

impl SaveOutcome {
    pub fn message(&self) -> &'static str {
        self.mode.success_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_strictly_increasing() {
        let ids: Vec<DraftId> = (0..100).map(|_| DraftId::generate()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_generated_id_tracks_clock() {
        let before = Utc::now().timestamp_millis();
        let id = DraftId::generate();
        assert!(id.0 >= before);
    }

    #[test]
    fn test_id_deserializes_from_number_or_string() {
        let a: DraftId = serde_json::from_str("1717171717171").unwrap();
        let b: DraftId = serde_json::from_str("\"1717171717171\"").unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<DraftId>("\"abc\"").is_err());
        assert!(serde_json::from_str::<DraftId>("1.5").is_err());
    }

    #[test]
    fn test_id_rejects_values_outside_i64() {
        let whole: DraftId = serde_json::from_str("1717171717171.0").unwrap();
        assert_eq!(whole, DraftId(1_717_171_717_171));
        assert!(serde_json::from_str::<DraftId>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<DraftId>("1e19").is_err());
        assert!(serde_json::from_str::<DraftId>("-1e19").is_err());
    }

    #[test]
    fn test_draft_uses_device_json_keys() {
        let mut draft = DraftProduct::with_id(DraftId(1));
        draft.name = "Jacket".to_string();
        draft.brand = "Zara".to_string();
        draft.piece_count = "1".to_string();
        draft.categories = vec!["Outerwear".to_string()];
        draft.media_files.push(MediaItem::video("file://b.mp4"));

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["productName"], "Jacket");
        assert_eq!(json["selectedBrand"], "Zara");
        assert_eq!(json["pieces"], "1");
        assert_eq!(json["selectedCategory"], serde_json::json!(["Outerwear"]));
        assert_eq!(
            json["mediaFiles"],
            serde_json::json!([{"uri": "file://b.mp4", "type": "video"}])
        );
        assert!(json["image"].is_null());
    }

    #[test]
    fn test_draft_missing_keys_take_defaults() {
        let draft: DraftProduct =
            serde_json::from_str(r#"{"id": "42", "productName": "Scarf"}"#).unwrap();
        assert_eq!(draft.id, DraftId(42));
        assert_eq!(draft.name, "Scarf");
        assert!(draft.image.is_none());
        assert!(draft.categories.is_empty());
        assert!(draft.piece_count.is_empty());
    }

    #[test]
    fn test_draft_without_id_is_rejected() {
        assert!(serde_json::from_str::<DraftProduct>(r#"{"productName": "Scarf"}"#).is_err());
    }

    #[test]
    fn test_toggle_category() {
        let mut draft = DraftProduct::with_id(DraftId(1));
        draft.toggle_category("Outerwear");
        draft.toggle_category("Knitwear");
        assert_eq!(draft.categories, vec!["Outerwear", "Knitwear"]);
        draft.toggle_category("Outerwear");
        assert_eq!(draft.categories, vec!["Knitwear"]);
    }

    #[test]
    fn test_set_categories_drops_duplicates() {
        let mut draft = DraftProduct::with_id(DraftId(1));
        draft.set_categories(vec![
            "Tops".to_string(),
            "Denim".to_string(),
            "Tops".to_string(),
        ]);
        assert_eq!(draft.categories, vec!["Tops", "Denim"]);
    }

    #[test]
    fn test_media_kind_from_asset_type() {
        assert_eq!(MediaKind::from_asset_type(Some("video/mp4")), MediaKind::Video);
        assert_eq!(MediaKind::from_asset_type(Some("image")), MediaKind::Image);
        assert_eq!(MediaKind::from_asset_type(None), MediaKind::Image);
    }

    #[test]
    fn test_media_count() {
        let mut draft = DraftProduct::with_id(DraftId(1));
        assert_eq!(draft.media_count(), 0);
        draft.image = Some("file://a.jpg".to_string());
        draft.media_files.push(MediaItem::image("file://c.jpg"));
        assert_eq!(draft.media_count(), 2);
    }

    #[test]
    fn test_save_mode_labels() {
        assert_eq!(SaveMode::Create.action_label(), "PUBLISH");
        assert_eq!(SaveMode::Replace.action_label(), "SAVE CHANGES");
        assert_eq!(SaveMode::Create.success_message(), "Product added successfully.");
        assert_eq!(SaveMode::Replace.success_message(), "Product updated successfully.");
    }

    #[test]
    fn test_save_mode_from_str() {
        assert_eq!("create".parse::<SaveMode>().unwrap(), SaveMode::Create);
        assert_eq!("REPLACE".parse::<SaveMode>().unwrap(), SaveMode::Replace);
        assert!("upsert".parse::<SaveMode>().is_err());
    }
}
