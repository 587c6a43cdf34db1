//! Command-line adapter for the compatibility resolver.
//!
//! `main.rs` owns process concerns (dotenv, logging, exit codes); everything
//! else lives here so handlers can be unit tested.

#![deny(unused_crate_dependencies)]

// Used by the binary target only
use dotenvy as _;
use tracing_subscriber as _;

pub mod commands;
pub mod context;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use commands::{Commands, CompatibleArgs, QueryCommand, ValidateArgs};
pub use context::CliContext;
pub use error::CliError;
pub use handlers::Outcome;
pub use parser::Cli;
