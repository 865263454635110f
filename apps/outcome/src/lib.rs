//! # outcome
//!
//! Library half of the `outcome` binary: the walkthrough driver, its
//! configuration and the CLI. Split out of `main.rs` so integration tests can
//! drive it directly.

pub mod cli;
pub mod config;
pub mod error;
pub mod walkthrough;

pub use config::{AppConfig, OutputConfig, OutputFormat};
pub use error::AppError;
pub use walkthrough::{ChainRequest, Step, WalkthroughInputs, run_chain, walkthrough};
