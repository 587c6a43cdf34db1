//! Compatibility resolution for Ascend NPU software stacks.
//!
//! Given a driver, an operating system, an NPU chip family and a CPU
//! architecture, decide which CANN toolkit versions (and which framework
//! builds on top of them) can be installed. The answer comes from a
//! declarative compatibility matrix, usually `data/compatibility.yaml`.
//!
//! ```no_run
//! use adk_core::{CompatibilityResolver, EnvironmentInfo, MatrixCache, resolve_matrix_path};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cache = MatrixCache::new();
//! let path = resolve_matrix_path(None)?;
//! let resolver = CompatibilityResolver::from_path(&cache, &path.path)?;
//!
//! let env = EnvironmentInfo::new("24.1.0", "ubuntu22.04", "910B", "aarch64");
//! let report = resolver.validate_environment(&env);
//! println!("{:?}", report.compatible_cann_versions);
//! # Ok(())
//! # }
//! ```
//!
//! Everything here is synchronous and free of network access. Resolvers are
//! `Send + Sync` and cheap to clone.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod errors;
pub mod loader;
pub mod paths;
pub mod resolver;
pub mod results;
pub mod version;

pub use domain::{
    CannVersionEntry, CompatibilityMatrix, CpuArch, EnvironmentInfo, FrameworkConfig,
    FrameworkKind, NpuType, SupportedOs,
};
pub use errors::{AdkError, AdkResult, DriverBound, ErrorReport};
pub use loader::{FsSource, MatrixCache, MatrixSource};
pub use paths::{
    MatrixPathResolution, MatrixPathSource, PathError, data_root, default_matrix_path,
    resolve_matrix_path,
};
pub use resolver::CompatibilityResolver;
pub use results::{CannRequirements, FrameworkDetails, QueryResult, ValidationResult};
pub use version::{InvalidVersionError, Version};

// Only exercised by the integration tests under tests/
#[cfg(test)]
use tempfile as _;
