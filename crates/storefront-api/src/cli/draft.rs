//! Product draft CLI subcommands.
//!
//! Drafts are read from JSON files in the same shape the device stores them
//! (`productName`, `selectedBrand`, `pieces`, ...). `publish` saves a new
//! listing, `update` replaces an existing one by id.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Subcommand;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use storefront_core::draft::validator;
use storefront_types::error::SubmitError;
use storefront_types::product::{DraftId, DraftProduct, SaveMode};
use storefront_types::validation::ValidationErrors;

use crate::state::AppState;

/// Draft subcommands.
#[derive(Subcommand)]
pub enum DraftCommand {
    /// List all saved drafts.
    #[command(alias = "ls")]
    List,

    /// Show a saved draft.
    Show {
        /// Draft id.
        id: DraftId,
    },

    /// Check a draft file without saving it.
    Validate {
        /// Path to a draft JSON file.
        file: PathBuf,
    },

    /// Validate a draft file and save it as a new listing.
    Publish {
        /// Path to a draft JSON file. A fresh id is assigned when it has none.
        file: PathBuf,
    },

    /// Validate a draft file and replace the saved draft with the same id.
    Update {
        /// Path to a draft JSON file (must carry the id of the draft to replace).
        file: PathBuf,
    },
}

/// Handle a draft subcommand.
pub async fn handle_draft_command(cmd: DraftCommand, state: &AppState, json: bool) -> Result<()> {
    match cmd {
        DraftCommand::List => list_drafts(state, json).await,
        DraftCommand::Show { id } => show_draft(state, id, json).await,
        DraftCommand::Validate { file } => validate_draft(&file, json).await,
        DraftCommand::Publish { file } => save_draft(state, &file, SaveMode::Create, json).await,
        DraftCommand::Update { file } => save_draft(state, &file, SaveMode::Replace, json).await,
    }
}

/// Parse draft JSON. When `assign_id` is set and the object has no `id`,
/// a freshly generated one is filled in.
pub fn parse_draft(content: &str, assign_id: bool) -> Result<DraftProduct> {
    let mut value: serde_json::Value =
        serde_json::from_str(content).context("draft file is not valid JSON")?;

    let Some(object) = value.as_object_mut() else {
        bail!("draft file must contain a JSON object");
    };
    if assign_id && !object.contains_key("id") {
        object.insert("id".to_string(), serde_json::json!(DraftId::generate()));
    }

    serde_json::from_value(value).context("draft file does not describe a product draft")
}

async fn read_draft(path: &Path, assign_id: bool) -> Result<DraftProduct> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_draft(&content, assign_id).with_context(|| format!("Invalid draft in {}", path.display()))
}

fn print_errors(errors: &ValidationErrors) {
    println!();
    for (field, message) in errors.iter() {
        println!("  {} {}: {}", style("x").red().bold(), style(field).cyan(), message);
    }
    println!();
}

/// Validate a draft file and report every failing field.
pub async fn validate_draft(file: &Path, json: bool) -> Result<()> {
    let draft = read_draft(file, true).await?;
    let errors = validator::validate(&draft);

    if json {
        let result = serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if errors.is_empty() {
        println!();
        println!("  {} '{}' is valid", style("ok").green(), style(&draft.name).cyan());
        println!();
    } else {
        print_errors(&errors);
    }

    if !errors.is_empty() {
        bail!("draft has {} invalid field(s)", errors.len());
    }
    Ok(())
}

/// Validate and persist a draft file.
async fn save_draft(state: &AppState, file: &Path, mode: SaveMode, json: bool) -> Result<()> {
    let draft = read_draft(file, mode == SaveMode::Create).await?;

    match state.draft_store.validate_and_save(&draft, mode).await {
        Ok(outcome) => {
            if json {
                let result = serde_json::json!({
                    "id": outcome.id,
                    "mode": outcome.mode,
                    "total": outcome.total,
                    "message": outcome.message(),
                });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!();
                println!(
                    "  {} {} ({} id {})",
                    style("ok").green(),
                    outcome.message(),
                    style(&draft.name).cyan(),
                    style(outcome.id).dim(),
                );
                println!();
            }
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            if json {
                let result = serde_json::json!({ "valid": false, "errors": errors });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_errors(&errors);
            }
            bail!("draft has {} invalid field(s); nothing was saved", errors.len())
        }
        Err(SubmitError::Storage(err)) => {
            Err(anyhow::Error::new(err).context(storefront_types::error::SAVE_FAILED_MESSAGE))
        }
    }
}

/// Show a single saved draft.
async fn show_draft(state: &AppState, id: DraftId, json: bool) -> Result<()> {
    let Some(draft) = state.draft_store.get(id).await? else {
        bail!("Draft {id} not found");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
        return Ok(());
    }

    let dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

    println!();
    println!("  {} {}", style(&draft.name).cyan().bold(), style(draft.id).dim());
    println!();
    println!("  Brand:          {}", dash(&draft.brand));
    println!("  Categories:     {}", dash(&draft.categories.join(", ")));
    println!("  Condition:      {}", dash(&draft.condition));
    println!(
        "  Price:          {} (was {})",
        dash(&draft.discounted_price),
        dash(&draft.original_price)
    );
    println!("  Pieces:         {}", dash(&draft.piece_count));
    println!("  Material:       {}", dash(&draft.primary_material));
    println!("  Color:          {}", dash(&draft.primary_color));
    println!("  Occasion:       {}", dash(&draft.occasion));
    println!("  Photo:          {}", dash(draft.image.as_deref().unwrap_or_default()));
    println!("  Reel:           {}", dash(draft.video.as_deref().unwrap_or_default()));
    for item in &draft.media_files {
        println!("  + {:<14} {}", item.kind.to_string(), item.uri);
    }
    if !draft.description.is_empty() {
        println!();
        println!("  {}", draft.description);
    }
    println!();

    Ok(())
}

/// List all saved drafts in stored order.
async fn list_drafts(state: &AppState, json: bool) -> Result<()> {
    let drafts = state.draft_store.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&drafts)?);
        return Ok(());
    }

    if drafts.is_empty() {
        println!();
        println!("  {} No drafts saved yet.", style("i").blue().bold());
        println!("     Publish one with: sfront draft publish <file.json>");
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Brand").fg(Color::White),
        Cell::new("Price").fg(Color::White),
        Cell::new("Pieces").fg(Color::White),
        Cell::new("Media").fg(Color::White),
    ]);

    for draft in &drafts {
        table.add_row(vec![
            Cell::new(draft.id).fg(Color::DarkGrey),
            Cell::new(&draft.name).fg(Color::Cyan),
            Cell::new(&draft.brand),
            Cell::new(format!("{} / {}", draft.discounted_price, draft.original_price)),
            Cell::new(&draft.piece_count),
            Cell::new(draft.media_count()),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} draft(s)", drafts.len());
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_draft_assigns_missing_id() {
        let draft = parse_draft(r#"{"productName": "Jacket"}"#, true).unwrap();
        assert!(draft.id.0 > 0);
        assert_eq!(draft.name, "Jacket");
    }

    #[test]
    fn test_parse_draft_keeps_existing_id() {
        let draft = parse_draft(r#"{"id": 12, "productName": "Jacket"}"#, true).unwrap();
        assert_eq!(draft.id, DraftId(12));
    }

    #[test]
    fn test_parse_draft_requires_id_for_update() {
        assert!(parse_draft(r#"{"productName": "Jacket"}"#, false).is_err());
    }

    #[test]
    fn test_parse_draft_rejects_non_object() {
        assert!(parse_draft("[1, 2]", true).is_err());
        assert!(parse_draft("not json", true).is_err());
    }

    #[tokio::test]
    async fn test_read_draft_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jacket.json");
        tokio::fs::write(
            &path,
            r#"{"id": 3, "productName": "Jacket", "selectedCategory": ["Outerwear"], "pieces": "1"}"#,
        )
        .await
        .unwrap();

        let draft = read_draft(&path, false).await.unwrap();
        assert_eq!(draft.id, DraftId(3));
        assert_eq!(draft.categories, vec!["Outerwear"]);
        assert_eq!(draft.piece_count, "1");
    }

    const JACKET: &str = r#"{
        "productName": "Jacket",
        "selectedBrand": "Zara",
        "selectedCategory": ["Outerwear"],
        "selectedProductCondition": "Like new",
        "image": "file://jacket.jpg",
        "originalPrice": "2000",
        "discountedPrice": "1500",
        "pieces": "1"
    }"#;

    async fn test_state(dir: &tempfile::TempDir) -> AppState {
        AppState::init(dir.path().join("data"), Default::default())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_publish_then_update_through_sqlite() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        let file = dir.path().join("jacket.json");
        tokio::fs::write(&file, JACKET).await.unwrap();
        save_draft(&state, &file, SaveMode::Create, true).await.unwrap();

        let saved = state.draft_store.list().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Jacket");

        let mut edited = saved[0].clone();
        edited.discounted_price = "1200".to_string();
        tokio::fs::write(&file, serde_json::to_string(&edited).unwrap())
            .await
            .unwrap();
        save_draft(&state, &file, SaveMode::Replace, true).await.unwrap();

        let saved = state.draft_store.list().await.unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, edited.id);
        assert_eq!(saved[0].discounted_price, "1200");
    }

    #[tokio::test]
    async fn test_publish_invalid_draft_fails_without_saving() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir).await;

        let file = dir.path().join("broken.json");
        tokio::fs::write(
            &file,
            r#"{"productName": "Jacket", "pieces": "abc", "originalPrice": ""}"#,
        )
        .await
        .unwrap();

        let err = save_draft(&state, &file, SaveMode::Create, false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("invalid field"), "{err}");
        assert!(state.draft_store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validate_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.json");
        let bad = dir.path().join("bad.json");
        tokio::fs::write(&good, JACKET).await.unwrap();
        tokio::fs::write(&bad, r#"{"productName": "Jacket"}"#).await.unwrap();

        assert!(validate_draft(&good, true).await.is_ok());
        assert!(validate_draft(&bad, true).await.is_err());
    }
}
