//! Storefront CLI entry point.
//!
//! Binary name: `sfront`
//!
//! Parses CLI arguments, loads configuration, initializes tracing and the
//! database, then dispatches to the appropriate command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::draft::DraftCommand;
use cli::{Cli, Commands};
use state::AppState;
use storefront_infra::config::load_config;
use storefront_infra::filesystem::resolve_data_dir;
use storefront_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need config, tracing or the database
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "sfront", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    let config = load_config(&data_dir).await;

    init_tracing(cli.log_directives(), cli.otel || config.enable_otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "starting");

    let result = run(cli, data_dir, config).await;

    shutdown_tracing();
    result
}

async fn run(
    cli: Cli,
    data_dir: std::path::PathBuf,
    config: storefront_types::config::StorefrontConfig,
) -> anyhow::Result<()> {
    match cli.command {
        Commands::Draft {
            action: DraftCommand::Validate { file },
        } => {
            cli::draft::validate_draft(&file, cli.json).await?;
        }

        Commands::Draft { action } => {
            let state = AppState::init(data_dir, config).await?;
            tracing::debug!(
                db = %state.data_dir.join(&state.config.database_file).display(),
                "database ready"
            );
            cli::draft::handle_draft_command(action, &state, cli.json).await?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}
