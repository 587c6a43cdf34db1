//! Compatibility data model.
//!
//! These types are the validated, immutable in-memory form of the
//! compatibility matrix plus the host description it is checked against.
//!
//! # Structure
//!
//! - `matrix` - `CompatibilityMatrix`, the construction gate for matrix data
//! - `entry` - per-toolkit requirements (`CannVersionEntry`) and `FrameworkConfig`
//! - `environment` - `EnvironmentInfo` describing a host
//! - `catalog` - identifiers known to the tooling (OS, NPU, arch, framework)

pub mod catalog;
mod entry;
mod environment;
mod matrix;
mod validators;

pub use catalog::{CpuArch, FrameworkKind, NpuType, SupportedOs, UnknownValueError};
pub use entry::{CannVersionEntry, FrameworkConfig};
pub use environment::EnvironmentInfo;
pub use matrix::{CompatibilityMatrix, EmptyMatrixError};
