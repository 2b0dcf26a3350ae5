//! CLI command definitions and dispatch for the `sfront` binary.
//!
//! Uses clap derive macros for argument parsing. The CLI follows a
//! noun-verb pattern (e.g., `sfront draft publish jacket.json`).

pub mod draft;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Compose and manage creator-store product drafts.
#[derive(Parser)]
#[command(name = "sfront", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage product drafts (list, show, validate, publish, update).
    Draft {
        #[command(subcommand)]
        action: draft::DraftCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

impl Cli {
    /// Tracing filter directives for the requested verbosity.
    pub fn log_directives(&self) -> &'static str {
        match self.verbose {
            0 if self.quiet => "error",
            0 => "warn",
            1 => "info,storefront_core=debug,storefront_infra=debug",
            _ => "trace",
        }
    }
}
