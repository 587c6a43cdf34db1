//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Ascend Docker Kit: resolve CANN, driver and framework compatibility.
///
/// Examples:
///   adk query cann --all            List every CANN version
///   adk query cann 8.0.0            Show CANN 8.0.0 requirements
///   adk compatible --driver 24.1.0  CANN versions usable with a driver
#[derive(Parser)]
#[command(name = "adk")]
#[command(version)]
#[command(verbatim_doc_comment)]
pub struct Cli {
    /// Path to compatibility.yaml (overrides ADK_MATRIX_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    pub matrix: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
