//! # Outcome
//!
//! The two-variant success/failure container and its combinators.
//!
//! - `Success(V)` holds a produced value
//! - `Failure(E)` holds a failure cause
//! - Every combinator consumes `self` and returns a new `Outcome`
//! - A combinator touches exactly one side: `map`/`flat_map` never see a
//!   `Failure`, `map_error`/`flat_map_error` never see a `Success`
//!
//! ## Covariance
//!
//! Rust has no declaration-site variance for enums over owned payloads, so
//! widening is explicit: `widen_value` and `widen_cause` re-type a payload
//! through `From`. Chaining steps whose causes differ is done by widening both
//! sides into a common cause type first.

use serde::{Deserialize, Serialize};

// =============================================================================
// OUTCOME
// =============================================================================

/// The result of a fallible operation, with the failure carried as a value.
///
/// There is no third state: an `Outcome` is always exactly one of
/// `Success` or `Failure`. Inspect it with an exhaustive `match` or with
/// [`Outcome::fold`], which requires a handler for both arms.
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<V, E> {
    /// The operation produced a value.
    Success(V),
    /// The operation failed with a cause.
    Failure(E),
}

impl<V, E> Outcome<V, E> {
    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Returns `true` if this is a `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Converts into the success value, discarding a cause.
    #[must_use]
    pub fn success(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure cause, discarding a value.
    #[must_use]
    pub fn failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Borrows the payload without consuming the outcome.
    pub const fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Collapses the outcome into a single value, one handler per variant.
    ///
    /// Both handlers are required, so a caller cannot forget an arm.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    // -------------------------------------------------------------------------
    // Combinators
    // -------------------------------------------------------------------------

    /// Transforms the success value; a `Failure` passes through untouched.
    ///
    /// `transform` runs exactly once on `Success` and never on `Failure`.
    #[inline]
    pub fn map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Chains a fallible step; the returned outcome replaces this one.
    ///
    /// A `Failure` short-circuits and `transform` is never called.
    #[inline]
    pub fn flat_map<U, F>(self, transform: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => transform(value),
            Self::Failure(cause) => Outcome::Failure(cause),
        }
    }

    /// Translates the failure cause; a `Success` passes through untouched.
    #[inline]
    pub fn map_error<G, F>(self, transform: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => Outcome::Failure(transform(cause)),
        }
    }

    /// Substitutes an alternative outcome for a failure (recovery/fallback).
    ///
    /// The outcome returned by `transform` is used as-is.
    #[inline]
    pub fn flat_map_error<G, F>(self, transform: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> Outcome<V, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(cause) => transform(cause),
        }
    }

    // -------------------------------------------------------------------------
    // Widening
    // -------------------------------------------------------------------------

    /// Re-types the success value into a wider type.
    #[inline]
    pub fn widen_value<U>(self) -> Outcome<U, E>
    where
        U: From<V>,
    {
        self.map(U::from)
    }

    /// Re-types the failure cause into a wider type.
    ///
    /// This is how two steps with different cause types are chained:
    /// widen both into a cause that has a `From` for each.
    #[inline]
    pub fn widen_cause<G>(self) -> Outcome<V, G>
    where
        G: From<E>,
    {
        self.map_error(G::from)
    }

    // -------------------------------------------------------------------------
    // Interop
    // -------------------------------------------------------------------------

    /// Converts into a standard `Result` so `?` can be used at the boundary.
    pub fn into_result(self) -> Result<V, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause),
        }
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

// =============================================================================
// TESTS
// =============================================================================
