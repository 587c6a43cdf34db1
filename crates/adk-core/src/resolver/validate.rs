use super::CompatibilityResolver;
use crate::domain::{CannVersionEntry, EnvironmentInfo};
use crate::results::ValidationResult;
use crate::version::Version;

impl CompatibilityResolver {
    /// Check a host against every toolkit version in the matrix.
    ///
    /// An entry passes when the driver is within its range and the OS, NPU
    /// and architecture are all supported. Deprecated entries that pass are
    /// still reported as compatible, with a warning.
    pub fn validate_environment(&self, env: &EnvironmentInfo) -> ValidationResult {
        let driver = Version::parse(&env.driver_version).ok();
        if driver.is_none() {
            tracing::debug!(
                driver_version = %env.driver_version,
                "driver version does not parse; every driver check fails"
            );
        }

        let mut passing = Vec::new();
        let mut warnings = Vec::new();

        for (version, entry) in self.matrix.entries() {
            let reasons = rejection_reasons(entry, env, driver.as_ref());
            if !reasons.is_empty() {
                tracing::debug!(
                    cann_version = version,
                    reasons = %reasons.join("; "),
                    "CANN version rejected"
                );
                continue;
            }

            if entry.deprecated {
                tracing::warn!(cann_version = version, "environment matches a deprecated CANN version");
                warnings.push(format!("CANN {version} is deprecated"));
            }
            passing.push(version);
        }

        if passing.is_empty() {
            return ValidationResult {
                valid: false,
                compatible_cann_versions: Vec::new(),
                errors: vec![
                    "No compatible CANN versions found for this environment".to_string(),
                    format!(
                        "Driver: {}, OS: {}, NPU: {}",
                        env.driver_version, env.os_name, env.npu_type
                    ),
                ],
                warnings,
            };
        }

        ValidationResult {
            valid: true,
            compatible_cann_versions: super::newest_first(passing),
            errors: Vec::new(),
            warnings,
        }
    }
}

fn rejection_reasons(
    entry: &CannVersionEntry,
    env: &EnvironmentInfo,
    driver: Option<&Version>,
) -> Vec<String> {
    let mut reasons = Vec::new();

    match driver {
        None => reasons.push(format!("Driver {} is not a valid version", env.driver_version)),
        Some(driver) => {
            if *driver < entry.min_driver_version {
                reasons.push(format!(
                    "Driver {} < required {}",
                    env.driver_version,
                    entry.min_driver_version.as_str()
                ));
            }
            if let Some(max) = entry.max_driver_version.as_ref().filter(|max| driver > *max) {
                reasons.push(format!(
                    "Driver {} > max supported {}",
                    env.driver_version,
                    max.as_str()
                ));
            }
        }
    }
    if !entry.supports_os(&env.os_name) {
        reasons.push(format!("OS {} not supported", env.os_name));
    }
    if !entry.supports_npu(&env.npu_type) {
        reasons.push(format!("NPU {} not supported", env.npu_type));
    }
    if !entry.supports_arch(&env.arch) {
        reasons.push(format!("Architecture {} not supported", env.arch));
    }

    reasons
}
