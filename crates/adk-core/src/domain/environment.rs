use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::catalog::CpuArch;

/// Description of a host, as reported by an environment probe.
///
/// Values are not checked against the matrix here; that is what
/// `CompatibilityResolver::validate_environment` is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub driver_version: String,
    pub os_name: String,
    pub npu_type: String,
    pub arch: String,
    #[serde(default)]
    pub firmware_version: Option<String>,
    #[serde(default = "single_npu")]
    pub npu_count: NonZeroU32,
}

const fn single_npu() -> NonZeroU32 {
    NonZeroU32::MIN
}

impl EnvironmentInfo {
    /// Build a single-NPU environment.
    ///
    /// Architecture aliases (`arm64`, `amd64`) are mapped to the names the
    /// matrix uses; unknown architectures are kept verbatim.
    pub fn new(
        driver_version: impl Into<String>,
        os_name: impl Into<String>,
        npu_type: impl Into<String>,
        arch: impl Into<String>,
    ) -> Self {
        let arch = arch.into();
        let arch = CpuArch::normalize(&arch).map_or(arch, |a| a.as_str().to_string());
        Self {
            driver_version: driver_version.into(),
            os_name: os_name.into(),
            npu_type: npu_type.into(),
            arch,
            firmware_version: None,
            npu_count: single_npu(),
        }
    }

    #[must_use]
    pub fn with_firmware(mut self, firmware_version: impl Into<String>) -> Self {
        self.firmware_version = Some(firmware_version.into());
        self
    }

    #[must_use]
    pub const fn with_npu_count(mut self, npu_count: NonZeroU32) -> Self {
        self.npu_count = npu_count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_normalizes_arch() {
        let env = EnvironmentInfo::new("24.1.0", "ubuntu22.04", "910B", "arm64");
        assert_eq!(env.arch, "aarch64");
        assert_eq!(env.npu_count.get(), 1);
        assert!(env.firmware_version.is_none());

        let odd = EnvironmentInfo::new("24.1.0", "ubuntu22.04", "910B", "riscv64");
        assert_eq!(odd.arch, "riscv64");
    }

    #[test]
    fn test_json_keys() {
        let env = EnvironmentInfo::new("24.1.0", "ubuntu22.04", "910B", "x86_64")
            .with_firmware("7.5.0.1.129")
            .with_npu_count(NonZeroU32::new(8).unwrap());
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["driver_version"], "24.1.0");
        assert_eq!(json["os_name"], "ubuntu22.04");
        assert_eq!(json["npu_type"], "910B");
        assert_eq!(json["arch"], "x86_64");
        assert_eq!(json["firmware_version"], "7.5.0.1.129");
        assert_eq!(json["npu_count"], 8);
    }

    #[test]
    fn test_zero_npus_rejected() {
        let result = serde_json::from_str::<EnvironmentInfo>(
            r#"{"driver_version":"1","os_name":"a","npu_type":"b","arch":"c","npu_count":0}"#,
        );
        assert!(result.is_err());

        let defaulted: EnvironmentInfo = serde_json::from_str(
            r#"{"driver_version":"1","os_name":"a","npu_type":"b","arch":"c"}"#,
        )
        .unwrap();
        assert_eq!(defaulted.npu_count.get(), 1);
    }
}
