//! # CLI Commands
//!
//! Implementations of CLI commands.
//!
//! A `Failure` coming out of a chain is printed like any other value; only an
//! `AppError` makes a command fail.

use crate::{AppConfig, AppError, ChainRequest, OutputFormat, run_chain, walkthrough};
use outcome_core::Cause;

// =============================================================================
// WALKTHROUGH COMMAND
// =============================================================================

/// Print every walkthrough step.
pub fn cmd_walkthrough(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Running walkthrough");

    let steps = walkthrough(&config.walkthrough);

    match config.output.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&steps)?);
        }
        OutputFormat::Text => {
            for step in &steps {
                println!("{}", step);
            }
        }
    }

    tracing::info!("Walkthrough finished ({} steps)", steps.len());
    Ok(())
}

// =============================================================================
// RUN COMMAND
// =============================================================================

/// Run one chain and print its outcome.
pub fn cmd_run(config: &AppConfig, request: &ChainRequest) -> Result<(), AppError> {
    tracing::info!(
        "Running chain on {:?} (fail: {}, wrappers: {}, follow-up: {})",
        request.value,
        request.fail,
        request.wrappers.len(),
        request.follow_up
    );

    let outcome = run_chain(request);
    let summary = outcome
        .as_ref()
        .fold(|value| value.join(", "), |cause| cause.message().to_string());

    if outcome.is_failure() {
        tracing::info!("Chain ended in failure: {}", summary);
    }

    match config.output.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "outcome": outcome,
                "success": outcome.is_success(),
                "summary": summary,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("OUTCOME: {:?}", outcome);
            println!("SUMMARY: {}", summary);
        }
    }

    Ok(())
}
