//! # Walkthrough
//!
//! The scripted demonstration: a fixed sequence of exhaustive matches and
//! combinator chains over the sample producers. Each step is returned as data
//! so the CLI can print it as text or JSON.

use outcome_core::{
    Cause, Failure, OperationError, Outcome, PipelineError, Success, operation, operation2,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// INPUTS
// =============================================================================

/// Values fed to the producers by the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkthroughInputs {
    /// Input of the producer calls that succeed.
    pub success_value: String,
    /// Input of the failing producer used for the match steps.
    pub error_value: String,
    /// Input of the failing producer used for the chain steps.
    pub failed_value: String,
}

impl Default for WalkthroughInputs {
    fn default() -> Self {
        Self {
            success_value: "SUCCESS".to_string(),
            error_value: "ERROR".to_string(),
            failed_value: "THIS OPERATION FAILED!".to_string(),
        }
    }
}

// =============================================================================
// STEP
// =============================================================================

/// One printed line of the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub label: String,
    pub rendered: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.rendered)
    }
}

fn record(steps: &mut Vec<Step>, label: &str, rendered: String) {
    tracing::debug!(step = label, %rendered, "walkthrough step");
    steps.push(Step {
        label: label.to_string(),
        rendered,
    });
}

/// Wraps its input as `tag(input)`.
fn wrap(tag: &str) -> impl Fn(String) -> String + '_ {
    move |inner| format!("{tag}({inner})")
}

fn remap(cause: OperationError) -> OperationError {
    OperationError::ErrorB(format!("remapped ({cause})"))
}

// =============================================================================
// WALKTHROUGH
// =============================================================================

/// Run every walkthrough step in order.
pub fn walkthrough(inputs: &WalkthroughInputs) -> Vec<Step> {
    let mut steps = Vec::with_capacity(9);

    // Matching: both arms are mandatory.
    let verdict = match operation(&inputs.success_value, true) {
        Success(_) => "SUCCESS!",
        Failure(_) => "ERROR!",
    };
    record(&mut steps, "RESULT 1", verdict.to_string());

    let verdict = match operation(&inputs.error_value, false) {
        Success(_) => "SUCCESS!",
        Failure(_) => "ERROR!",
    };
    record(&mut steps, "RESULT 2", verdict.to_string());

    let verdict = match operation(&inputs.error_value, false) {
        Success(_) => "SUCCESS!",
        Failure(OperationError::ErrorA(_)) => "ERROR A",
        Failure(OperationError::ErrorB(_)) => "ERROR B",
    };
    record(&mut steps, "RESULT 3", verdict.to_string());

    // Chaining.
    let mapped = operation(&inputs.success_value, true)
        .map(wrap("X"))
        .map(wrap("Y"));
    record(&mut steps, "MAPPED OUTCOME 1", format!("{mapped:?}"));

    let mapped_failure = operation(&inputs.failed_value, false)
        .map(wrap("X"))
        .map(wrap("Y"));
    record(&mut steps, "MAPPED OUTCOME 2", format!("{mapped_failure:?}"));

    let followed: Outcome<Vec<String>, PipelineError> = mapped
        .widen_cause()
        .flat_map(|v| operation2(v, true).widen_cause());
    record(&mut steps, "MAPPED OUTCOME 3", format!("{followed:?}"));

    let remapped = mapped_failure.map_error(remap);
    record(&mut steps, "MAPPED OUTCOME 4", format!("{remapped:?}"));

    let combined: Outcome<Vec<String>, PipelineError> = operation(&inputs.success_value, true)
        .map(wrap("X"))
        .map(wrap("Y"))
        .widen_cause()
        .flat_map(|v| operation2(v, true).widen_cause())
        .map_error(|cause| match cause {
            PipelineError::Operation(cause) => PipelineError::Operation(remap(cause)),
            other => other,
        });
    record(&mut steps, "MAPPED OUTCOME 5", format!("{combined:?}"));

    // Extracting: fold is the handler-per-arm form of a match.
    let extracted = followed.fold(
        |value| format!("{value:?}"),
        |cause| cause.message().to_string(),
    );
    record(&mut steps, "RESULT 4", extracted);

    steps
}

// =============================================================================
// SINGLE CHAIN
// =============================================================================

/// A user-specified chain for the `run` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainRequest {
    /// Producer input.
    pub value: String,
    /// Make the first producer fail.
    pub fail: bool,
    /// Tags applied with `map`, innermost first.
    pub wrappers: Vec<String>,
    /// Chain the second producer with `flat_map`.
    pub follow_up: bool,
}

/// Run `operation`, map every wrapper over it, then optionally `flat_map`
/// into `operation2`. Without a follow-up the value is lifted into a
/// one-element list so both shapes share a type.
pub fn run_chain(request: &ChainRequest) -> Outcome<Vec<String>, PipelineError> {
    let mapped = request
        .wrappers
        .iter()
        .fold(operation(request.value.as_str(), !request.fail), |outcome, tag| {
            outcome.map(|inner| format!("{tag}({inner})"))
        });

    let widened: Outcome<String, PipelineError> = mapped.widen_cause();
    if request.follow_up {
        widened.flat_map(|v| operation2(v, true).widen_cause())
    } else {
        widened.map(|v| vec![v])
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_displays_label_and_rendering() {
        let step = Step {
            label: "RESULT 1".to_string(),
            rendered: "SUCCESS!".to_string(),
        };
        assert_eq!(step.to_string(), "RESULT 1: SUCCESS!");
    }

    #[test]
    fn wrap_nests() {
        assert_eq!(wrap("Y")(wrap("X")("v".to_string())), "Y(X(v))");
    }

    #[test]
    fn run_chain_without_wrappers_lifts_value() {
        let request = ChainRequest {
            value: "plain".to_string(),
            ..ChainRequest::default()
        };
        assert_eq!(run_chain(&request), Success(vec!["plain".to_string()]));
    }

    #[test]
    fn run_chain_failure_skips_wrappers_and_follow_up() {
        let request = ChainRequest {
            value: "bad".to_string(),
            fail: true,
            wrappers: vec!["X".to_string()],
            follow_up: true,
        };
        assert_eq!(
            run_chain(&request),
            Failure(PipelineError::Operation(OperationError::ErrorA(
                "bad".to_string()
            )))
        );
    }
}
