//! Command handlers.
//!
//! Each handler builds its output with pure functions over the resolver and
//! prints it; `execute` returns whether the command's answer was positive.

pub mod compatible;
pub mod paths;
pub mod query;
pub mod validate;

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The command ran but the answer is negative (incompatible, not found).
    Failure,
}

impl Outcome {
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Success } else { Self::Failure }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::{Path, PathBuf};

    use adk_core::CompatibilityResolver;

    pub const MATRIX_YAML: &str = r#"
version: "1.0"
last_updated: "2024-11-20"
cann_versions:
  "8.0.0":
    min_driver_version: "24.1.rc1"
    supported_os: ["ubuntu22.04", "openEuler22.03"]
    supported_npu: ["910B", "910B3"]
    supported_arch: ["x86_64", "aarch64"]
    frameworks:
      pytorch:
        version: "2.4.0"
        torch_npu_version: "2.4.0.post2"
        python_versions: ["3.9", "3.10", "3.11"]
        whl_url: "https://example.invalid/torch_npu-2.4.0.post2-cp{py_version}-{arch}.whl"
        install_command: "pip install torch==2.4.0 torch_npu==2.4.0.post2"
  "7.0.0":
    min_driver_version: "23.0.3"
    max_driver_version: "24.1.0"
    supported_os: ["ubuntu20.04", "ubuntu22.04"]
    supported_npu: ["910A", "910B"]
    supported_arch: ["aarch64"]
  "6.3.0":
    min_driver_version: "23.0.0"
    supported_os: ["ubuntu20.04"]
    supported_npu: ["910A"]
    supported_arch: ["aarch64"]
    deprecated: true
"#;

    pub fn resolver() -> CompatibilityResolver {
        CompatibilityResolver::from_yaml_str(MATRIX_YAML).expect("fixture matrix is valid")
    }

    pub fn write_matrix(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join("compatibility.yaml");
        fs::write(&path, contents).expect("write matrix fixture");
        path
    }
}
