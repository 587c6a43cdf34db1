//! Subcommands.

use std::num::NonZeroU32;

use adk_core::{CpuArch, FrameworkKind};
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Query compatibility matrix information
    Query {
        #[command(subcommand)]
        command: QueryCommand,
    },

    /// List CANN versions compatible with a driver
    Compatible(CompatibleArgs),

    /// Validate an environment against the matrix
    Validate(ValidateArgs),

    /// Show the resolved matrix path and where it came from
    Paths,
}

#[derive(Subcommand)]
pub enum QueryCommand {
    /// List CANN versions, or show one version's requirements
    Cann {
        /// CANN version to show (lists all versions when omitted)
        version: Option<String>,

        /// Include deprecated versions
        #[arg(short = 'a', long = "all")]
        all: bool,

        /// Output as JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },

    /// Show framework configuration for a CANN version
    Framework {
        /// CANN version
        cann_version: String,

        /// Framework name (pytorch, mindspore)
        framework: FrameworkKind,

        /// Python version for the wheel URL (defaults to the newest supported)
        #[arg(long)]
        python: Option<String>,

        /// Render the wheel URL for this architecture
        #[arg(long)]
        arch: Option<CpuArch>,

        /// Output as JSON
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
}

#[derive(Args)]
pub struct CompatibleArgs {
    /// Installed driver version (e.g. 24.1.0)
    #[arg(long)]
    pub driver: String,

    /// Only versions supporting this OS (e.g. ubuntu22.04)
    #[arg(long)]
    pub os: Option<String>,

    /// Only versions supporting this NPU type (e.g. 910B)
    #[arg(long)]
    pub npu: Option<String>,

    /// Output as JSON
    #[arg(short = 'j', long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Installed driver version
    #[arg(long)]
    pub driver: String,

    /// Operating system identifier (e.g. ubuntu22.04)
    #[arg(long)]
    pub os: String,

    /// NPU type (e.g. 910B)
    #[arg(long)]
    pub npu: String,

    /// CPU architecture (x86_64, aarch64; amd64/arm64 accepted)
    #[arg(long)]
    pub arch: CpuArch,

    /// NPU firmware version
    #[arg(long)]
    pub firmware: Option<String>,

    /// Number of NPUs on the host
    #[arg(long = "npu-count", default_value = "1")]
    pub npu_count: NonZeroU32,

    /// Check against one CANN version instead of the whole matrix
    #[arg(long = "cann")]
    pub cann: Option<String>,

    /// Output as JSON
    #[arg(short = 'j', long = "json")]
    pub json: bool,
}
