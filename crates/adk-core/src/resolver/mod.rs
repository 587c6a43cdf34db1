//! Query and validation surface over a loaded matrix.
//!
//! Two method families share one resolver:
//!
//! - result-style (`get_cann_requirements`, `find_framework_config`,
//!   `validate_environment`, ...) never fail and report misses inside the
//!   returned value;
//! - assertion-style (`get_cann_entry`, `check_*`, `get_framework`) return
//!   a typed [`AdkError`](crate::AdkError) carrying suggestions.

mod checks;
mod validate;

use std::sync::Arc;

use crate::domain::{CannVersionEntry, CompatibilityMatrix, FrameworkConfig};
use crate::errors::{AdkError, AdkResult};
use crate::results::{CannRequirements, FrameworkDetails, QueryResult};
use crate::version::{Version, is_version_valid, sort_versions};

/// Read-only view of a compatibility matrix.
///
/// Cloning is cheap: the matrix sits behind an `Arc` and is shared with the
/// cache that produced it.
#[derive(Debug, Clone)]
pub struct CompatibilityResolver {
    matrix: Arc<CompatibilityMatrix>,
}

impl CompatibilityResolver {
    pub fn new(matrix: CompatibilityMatrix) -> Self {
        Self::from_shared(Arc::new(matrix))
    }

    pub const fn from_shared(matrix: Arc<CompatibilityMatrix>) -> Self {
        Self { matrix }
    }

    /// Build a resolver straight from YAML text, bypassing any cache.
    pub fn from_yaml_str(text: &str) -> AdkResult<Self> {
        CompatibilityMatrix::from_yaml_str(text).map(Self::new)
    }

    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    /// Toolkit versions, newest first.
    pub fn list_cann_versions(&self, include_deprecated: bool) -> Vec<String> {
        let keys = self
            .matrix
            .entries()
            .filter(|(_, entry)| include_deprecated || !entry.deprecated)
            .map(|(version, _)| version);
        newest_first(keys.collect())
    }

    fn all_versions(&self) -> Vec<String> {
        self.list_cann_versions(true)
    }

    fn not_found<T>(&self, cann_version: &str) -> QueryResult<T> {
        QueryResult::failure(
            format!("CANN version '{cann_version}' not found"),
            vec![format!(
                "Available versions: {}",
                self.list_cann_versions(false).join(", ")
            )],
        )
    }

    /// Requirements for one toolkit version.
    pub fn get_cann_requirements(&self, cann_version: &str) -> QueryResult<CannRequirements> {
        match self.matrix.get_cann_version(cann_version) {
            Some(entry) => QueryResult::ok(CannRequirements::from_entry(cann_version, entry)),
            None => self.not_found(cann_version),
        }
    }

    /// Non-deprecated toolkit versions that accept the driver, newest first.
    ///
    /// `os_name` and `npu_type` narrow the search when given. A driver string
    /// that does not parse matches nothing.
    pub fn find_compatible_cann(
        &self,
        driver_version: &str,
        os_name: Option<&str>,
        npu_type: Option<&str>,
    ) -> Vec<String> {
        let Ok(driver) = Version::parse(driver_version) else {
            tracing::debug!(driver_version, "driver version does not parse; nothing matches");
            return Vec::new();
        };

        let matches = self
            .matrix
            .entries()
            .filter(|(_, entry)| !entry.deprecated)
            .filter(|(_, entry)| entry.accepts_driver(&driver))
            .filter(|(_, entry)| os_name.is_none_or(|os| entry.supports_os(os)))
            .filter(|(_, entry)| npu_type.is_none_or(|npu| entry.supports_npu(npu)))
            .map(|(version, _)| version);

        newest_first(matches.collect())
    }

    /// Newest compatible toolkit version, if any.
    pub fn recommend_cann_version(
        &self,
        driver_version: &str,
        os_name: Option<&str>,
        npu_type: Option<&str>,
    ) -> Option<String> {
        self.find_compatible_cann(driver_version, os_name, npu_type)
            .into_iter()
            .next()
    }

    pub fn get_framework_config(
        &self,
        cann_version: &str,
        framework: &str,
    ) -> Option<&FrameworkConfig> {
        self.matrix.framework(cann_version, framework)
    }

    /// Framework configuration as a result envelope.
    pub fn find_framework_config(
        &self,
        cann_version: &str,
        framework: &str,
    ) -> QueryResult<FrameworkDetails> {
        let Some(entry) = self.matrix.get_cann_version(cann_version) else {
            return self.not_found(cann_version);
        };

        match entry.frameworks.get(framework) {
            Some(config) => QueryResult::ok(FrameworkDetails::from_config(framework, config)),
            None => QueryResult::failure(
                format!("Framework '{framework}' not available for CANN {cann_version}"),
                vec![format!(
                    "Available frameworks: {}",
                    entry.framework_names().join(", ")
                )],
            ),
        }
    }

    /// Entry for a toolkit version, or the list of every known version.
    pub fn get_cann_entry(&self, cann_version: &str) -> AdkResult<&CannVersionEntry> {
        self.matrix
            .get_cann_version(cann_version)
            .ok_or_else(|| AdkError::cann_not_found(cann_version, self.all_versions()))
    }
}

/// Matrix keys newest first.
///
/// Keys that are not versions (e.g. `8.0.RC2.alpha003`) cannot be ordered;
/// they follow the sorted ones in matrix order instead of being dropped.
fn newest_first(keys: Vec<&str>) -> Vec<String> {
    let mut ordered: Vec<String> = sort_versions(keys.iter().copied(), true)
        .into_iter()
        .map(str::to_string)
        .collect();
    ordered.extend(
        keys.into_iter()
            .filter(|key| !is_version_valid(key))
            .map(str::to_string),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
version: "1.0"
last_updated: "2024-11-20"
cann_versions:
  "8.0.0":
    min_driver_version: "24.1.rc1"
    supported_os: ["ubuntu22.04", "openEuler22.03"]
    supported_npu: ["910B", "910B3"]
    supported_arch: ["aarch64", "x86_64"]
    frameworks:
      pytorch:
        version: "2.4.0"
        torch_npu_version: "2.4.0.post2"
        python_versions: ["3.9", "3.10"]
  "8.0.0rc3":
    min_driver_version: "24.1.rc1"
    supported_os: ["ubuntu22.04"]
    supported_npu: ["910B"]
    supported_arch: ["aarch64"]
  "7.0.0":
    min_driver_version: "23.0.3"
    max_driver_version: "24.1.0"
    supported_os: ["ubuntu20.04", "ubuntu22.04"]
    supported_npu: ["910A", "910B"]
    supported_arch: ["aarch64", "x86_64"]
  "6.3.0":
    min_driver_version: "23.0.0"
    supported_os: ["ubuntu20.04"]
    supported_npu: ["910A"]
    supported_arch: ["aarch64"]
    deprecated: true
"#;

    fn resolver() -> CompatibilityResolver {
        CompatibilityResolver::from_yaml_str(DOC).unwrap()
    }

    #[test]
    fn test_list_versions_descending() {
        assert_eq!(
            resolver().list_cann_versions(false),
            vec!["8.0.0", "8.0.0rc3", "7.0.0"]
        );
        assert_eq!(
            resolver().list_cann_versions(true),
            vec!["8.0.0", "8.0.0rc3", "7.0.0", "6.3.0"]
        );
    }

    #[test]
    fn test_requirements_hit() {
        let result = resolver().get_cann_requirements("8.0.0");
        assert!(result.success);
        let data = result.data.unwrap();
        assert_eq!(data.min_driver_version, "24.1.rc1");
        assert_eq!(data.max_driver_version, None);
        assert_eq!(data.frameworks, vec!["pytorch"]);
        assert!(!data.deprecated);
    }

    #[test]
    fn test_requirements_miss() {
        let result = resolver().get_cann_requirements("99.0.0");
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.error.as_deref(), Some("CANN version '99.0.0' not found"));
        assert_eq!(
            result.suggestions,
            vec!["Available versions: 8.0.0, 8.0.0rc3, 7.0.0".to_string()]
        );
    }

    #[test]
    fn test_find_compatible_filters() {
        let r = resolver();
        assert_eq!(
            r.find_compatible_cann("24.1.0", None, None),
            vec!["8.0.0", "8.0.0rc3", "7.0.0"]
        );
        assert_eq!(
            r.find_compatible_cann("24.1.0", Some("openEuler22.03"), None),
            vec!["8.0.0"]
        );
        assert_eq!(
            r.find_compatible_cann("24.1.0", None, Some("910A")),
            vec!["7.0.0"]
        );
        // above 7.0.0's max
        assert_eq!(
            r.find_compatible_cann("24.2.0", None, None),
            vec!["8.0.0", "8.0.0rc3"]
        );
        assert_eq!(r.find_compatible_cann("23.0.3", None, None), vec!["7.0.0"]);
        assert!(r.find_compatible_cann("20.0.0", None, None).is_empty());
        assert!(r.find_compatible_cann("garbage", None, None).is_empty());
    }

    #[test]
    fn test_recommend() {
        let r = resolver();
        assert_eq!(
            r.recommend_cann_version("24.1.0", Some("ubuntu22.04"), Some("910B")),
            Some("8.0.0".to_string())
        );
        assert_eq!(r.recommend_cann_version("1.0.0", None, None), None);
    }

    #[test]
    fn test_framework_lookups() {
        let r = resolver();
        let config = r.get_framework_config("8.0.0", "pytorch").unwrap();
        assert_eq!(config.torch_npu_version.as_deref(), Some("2.4.0.post2"));
        assert!(r.get_framework_config("8.0.0", "tensorflow").is_none());
        assert!(r.get_framework_config("1.0.0", "pytorch").is_none());

        let found = r.find_framework_config("8.0.0", "pytorch");
        assert!(found.success);
        assert_eq!(found.data.unwrap().python_versions, vec!["3.9", "3.10"]);

        let missing = r.find_framework_config("8.0.0", "tensorflow");
        assert_eq!(
            missing.error.as_deref(),
            Some("Framework 'tensorflow' not available for CANN 8.0.0")
        );
        assert_eq!(missing.suggestions, vec!["Available frameworks: pytorch"]);

        let no_version = r.find_framework_config("1.0.0", "pytorch");
        assert!(no_version.suggestions[0].starts_with("Available versions:"));
    }

    #[test]
    fn test_get_cann_entry_lists_deprecated_too() {
        let err = resolver().get_cann_entry("5.0.0").unwrap_err();
        assert_eq!(err.kind(), "version_not_found");
        assert_eq!(
            err.suggestions(),
            vec!["Available CANN versions: 8.0.0, 8.0.0rc3, 7.0.0, 6.3.0".to_string()]
        );
    }

    #[test]
    fn test_resolver_is_shareable() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<CompatibilityResolver>();

        let r = resolver();
        let copy = r.clone();
        assert!(std::ptr::eq(r.matrix(), copy.matrix()));
    }

    #[test]
    fn test_unorderable_keys_follow_sorted_ones() {
        assert_eq!(
            newest_first(vec!["7.0.0", "8.0.RC2.alpha003", "8.0.0", "latest"]),
            vec!["8.0.0", "7.0.0", "8.0.RC2.alpha003", "latest"]
        );
    }
}
