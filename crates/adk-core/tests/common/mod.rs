//! Shared matrix fixtures for adk-core integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use adk_core::CompatibilityResolver;

/// Four-entry matrix used across the scenario tests.
///
/// - `8.0.0`: current release, driver >= 24.1.rc1, x86_64 only
/// - `8.0.0rc3`: release candidate of the same line
/// - `7.0.0`: driver in [23.0.3, 24.1.0]
/// - `6.3.0`: deprecated, overlapping 7.0.0 for older hosts
pub const MATRIX_YAML: &str = r#"
version: "1.0"
last_updated: "2024-11-20"
cann_versions:
  "8.0.0":
    min_driver_version: "24.1.rc1"
    supported_os: ["ubuntu22.04"]
    supported_npu: ["910B"]
    supported_arch: ["x86_64"]
    frameworks:
      pytorch:
        version: "2.4.0"
        torch_npu_version: "2.4.0.post2"
        python_versions: ["3.9", "3.10", "3.11"]
        whl_url: "https://example.invalid/torch_npu-2.4.0.post2-cp{py_version}-{arch}.whl"
      mindspore:
        version: "2.4.0"
        python_versions: ["3.9", "3.10"]
  "8.0.0rc3":
    min_driver_version: "24.1.rc1"
    supported_os: ["ubuntu22.04", "openEuler22.03"]
    supported_npu: ["910B", "910B3"]
    supported_arch: ["x86_64", "aarch64"]
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

#[allow(dead_code)]
pub fn resolver() -> CompatibilityResolver {
    CompatibilityResolver::from_yaml_str(MATRIX_YAML).expect("fixture matrix is valid")
}

/// Write `contents` to `<dir>/compatibility.yaml` and return the path.
#[allow(dead_code)]
pub fn write_matrix(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("compatibility.yaml");
    fs::write(&path, contents).expect("write matrix fixture");
    path
}

/// Path of the matrix bundled with the repository.
#[allow(dead_code)]
pub fn bundled_matrix() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/compatibility.yaml")
}
