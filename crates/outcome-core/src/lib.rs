//! # outcome-core
//!
//! A typed success/failure container - THE TYPE.
//!
//! [`Outcome<V, E>`](Outcome) encodes "this operation may fail with a typed
//! cause" as a plain value. A caller either matches on it exhaustively or
//! chains it through the four combinators:
//!
//! | Combinator | Runs on | Produces |
//! |---|---|---|
//! | `map` | `Success` | `Success(transform(v))` |
//! | `flat_map` | `Success` | `transform(v)` |
//! | `map_error` | `Failure` | `Failure(transform(e))` |
//! | `flat_map_error` | `Failure` | `transform(e)` |
//!
//! ```
//! use outcome_core::{Failure, Success, operation};
//!
//! let chained = operation("SUCCESS", true)
//!     .map(|v| format!("X({v})"))
//!     .map(|v| format!("Y({v})"));
//! assert_eq!(chained, Success("Y(X(SUCCESS))".to_string()));
//!
//! let verdict = match operation("ERROR", false) {
//!     Success(_) => "SUCCESS!",
//!     Failure(_) => "ERROR!",
//! };
//! assert_eq!(verdict, "ERROR!");
//! ```
//!
//! ## Architectural Constraints
//!
//! - NO I/O, NO logging, NO async
//! - Combinators never mutate; they consume and rebuild
//! - Panics inside a transform are never caught
//! - The cause type is unbounded; [`Cause`] is a convention, not a requirement

// =============================================================================
// MODULES
// =============================================================================

pub mod cause;
pub mod operations;
pub mod outcome;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use cause::Cause;
pub use operations::{FollowUpError, OperationError, PipelineError, operation, operation2};
pub use outcome::Outcome::{self, Failure, Success};
