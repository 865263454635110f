//! # Outcome - Walkthrough Binary
//!
//! Demonstrates the `outcome-core` success/failure container.
//!
//! ## Usage
//!
//! ```bash
//! # Print the full walkthrough (default command)
//! outcome
//! outcome walkthrough --json-mode
//!
//! # Run one chain
//! outcome run SUCCESS -w X -w Y --follow-up
//! outcome run BROKEN --fail -w X
//! ```
//!
//! Logs go to stderr; stdout carries only command output.

use clap::Parser;
use outcome::cli;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing. OUTCOME_LOG_FORMAT=json enables machine-parseable output.
fn init_tracing(verbose: bool) {
    let log_format = std::env::var("OUTCOME_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_directive = if verbose {
        "outcome=debug"
    } else {
        "outcome=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
