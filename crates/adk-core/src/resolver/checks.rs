//! Assertion-style checks: `Ok(())` or a typed error with suggestions.

use super::CompatibilityResolver;
use crate::domain::FrameworkConfig;
use crate::errors::{AdkError, AdkResult, DriverBound};
use crate::version::Version;

impl CompatibilityResolver {
    /// Fail unless the driver lies within the entry's `[min, max]` range.
    pub fn check_driver_compatibility(&self, driver_version: &str, cann_version: &str) -> AdkResult<()> {
        let entry = self.get_cann_entry(cann_version)?;
        let driver = Version::parse(driver_version)?;

        let violated = if driver < entry.min_driver_version {
            Some(DriverBound::Minimum(
                entry.min_driver_version.as_str().to_string(),
            ))
        } else {
            entry
                .max_driver_version
                .as_ref()
                .filter(|max| driver > **max)
                .map(|max| DriverBound::Maximum(max.as_str().to_string()))
        };

        match violated {
            None => Ok(()),
            Some(bound) => Err(AdkError::DriverIncompatible {
                driver_version: driver_version.to_string(),
                cann_version: cann_version.to_string(),
                bound,
            }),
        }
    }

    pub fn check_os_compatibility(&self, os_name: &str, cann_version: &str) -> AdkResult<()> {
        let entry = self.get_cann_entry(cann_version)?;
        if entry.supports_os(os_name) {
            return Ok(());
        }
        Err(AdkError::OsNotSupported {
            os_name: os_name.to_string(),
            cann_version: cann_version.to_string(),
            supported_os: entry.supported_os.clone(),
        })
    }

    pub fn check_npu_compatibility(&self, npu_type: &str, cann_version: &str) -> AdkResult<()> {
        let entry = self.get_cann_entry(cann_version)?;
        if entry.supports_npu(npu_type) {
            return Ok(());
        }
        Err(AdkError::NpuNotSupported {
            npu_type: npu_type.to_string(),
            cann_version: cann_version.to_string(),
            supported_npu: entry.supported_npu.clone(),
        })
    }

    /// Framework configuration, or why it is unavailable.
    pub fn get_framework(&self, cann_version: &str, framework: &str) -> AdkResult<&FrameworkConfig> {
        let entry = self.get_cann_entry(cann_version)?;
        entry
            .frameworks
            .get(framework)
            .ok_or_else(|| AdkError::FrameworkNotFound {
                framework: framework.to_string(),
                cann_version: cann_version.to_string(),
                available_frameworks: entry.framework_names(),
            })
    }
}
