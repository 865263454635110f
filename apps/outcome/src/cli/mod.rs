//! # Outcome CLI Module
//!
//! This module implements the CLI interface for the walkthrough binary.
//!
//! ## Available Commands
//!
//! - `walkthrough` - Print every walkthrough step (default)
//! - `run` - Run a single operation chain and print its outcome

mod commands;

use crate::{AppConfig, AppError, ChainRequest, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Outcome - typed success/failure walkthrough
///
/// Shows how a fallible operation returns its failure as a value
/// and how map, flat_map, map_error and flat_map_error chain it.
#[derive(Parser, Debug)]
#[command(name = "outcome")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging (per-step events)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every walkthrough step
    Walkthrough,

    /// Run one operation chain
    Run {
        /// Input passed to the first operation
        value: String,

        /// Make the first operation fail
        #[arg(long)]
        fail: bool,

        /// Tag to wrap the value with via `map` (repeatable, innermost first)
        #[arg(short, long = "wrap")]
        wrap: Vec<String>,

        /// Chain the follow-up operation with `flat_map`
        #[arg(long)]
        follow_up: bool,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Load the config file (if any) and apply the global flags on top of it.
///
/// `--json-mode` forces JSON output and `--quiet` turns the banner off,
/// whatever the file says. JSON output never carries a banner.
pub fn resolve_config(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::resolve(cli.config.as_deref())?;
    if cli.json_mode {
        config.output.format = OutputFormat::Json;
    }
    if cli.quiet || config.output.format == OutputFormat::Json {
        config.output.banner = false;
    }
    Ok(config)
}

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let config = resolve_config(&cli)?;

    if config.output.banner {
        print_banner();
    }

    match cli.command {
        Some(Commands::Walkthrough) | None => cmd_walkthrough(&config),
        Some(Commands::Run {
            value,
            fail,
            wrap,
            follow_up,
        }) => cmd_run(
            &config,
            &ChainRequest {
                value,
                fail,
                wrappers: wrap,
                follow_up,
            },
        ),
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  outcome v{}

  Success | Failure  -  map • flat_map • map_error • flat_map_error
"#,
        env!("CARGO_PKG_VERSION")
    );
}
