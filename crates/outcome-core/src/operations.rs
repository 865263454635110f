//! # Sample Operations
//!
//! Two producers that return an [`Outcome`] and the closed cause enums they
//! fail with. They exist to exercise the combinators: each one succeeds or
//! fails purely on its `is_success` flag.
//!
//! The two producers fail with different cause types. [`PipelineError`] is the
//! common cause both widen into when they are chained.

use crate::{Cause, Outcome};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CAUSES
// =============================================================================

/// Failure reasons of [`operation`].
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum OperationError {
    /// The operation rejected its input.
    #[error("{0}")]
    ErrorA(String),

    /// Reserved by [`operation`]; produced by callers that remap a cause.
    #[error("{0}")]
    ErrorB(String),
}

impl Cause for OperationError {
    fn message(&self) -> &str {
        match self {
            Self::ErrorA(message) | Self::ErrorB(message) => message,
        }
    }
}

/// Failure reasons of [`operation2`].
#[allow(clippy::enum_variant_names)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum FollowUpError {
    /// The follow-up rejected its input.
    #[error("{0}")]
    ErrorA2(String),

    /// Reserved by [`operation2`].
    #[error("{0}")]
    ErrorB2(String),
}

impl Cause for FollowUpError {
    fn message(&self) -> &str {
        match self {
            Self::ErrorA2(message) | Self::ErrorB2(message) => message,
        }
    }
}

/// Either producer's cause, for chains that run both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PipelineError {
    /// The first step failed.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// The follow-up step failed.
    #[error(transparent)]
    FollowUp(#[from] FollowUpError),
}

impl Cause for PipelineError {
    fn message(&self) -> &str {
        match self {
            Self::Operation(cause) => cause.message(),
            Self::FollowUp(cause) => cause.message(),
        }
    }
}

// =============================================================================
// PRODUCERS
// =============================================================================

/// Succeeds with `value`, or fails with `ErrorA(value)`.
pub fn operation(value: impl Into<String>, is_success: bool) -> Outcome<String, OperationError> {
    let value = value.into();
    if is_success {
        Outcome::Success(value)
    } else {
        Outcome::Failure(OperationError::ErrorA(value))
    }
}

/// Succeeds with a one-element list holding `value`, or fails with
/// `ErrorA2(value)`.
pub fn operation2(
    value: impl Into<String>,
    is_success: bool,
) -> Outcome<Vec<String>, FollowUpError> {
    let value = value.into();
    if is_success {
        Outcome::Success(vec![value])
    } else {
        Outcome::Failure(FollowUpError::ErrorA2(value))
    }
}

// =============================================================================
// TESTS
// =============================================================================
