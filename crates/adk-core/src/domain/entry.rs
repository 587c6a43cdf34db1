//! Per-toolkit requirements and framework configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::CpuArch;
use super::validators;
use crate::errors::AdkError;
use crate::version::Version;

/// How to obtain one framework build for a toolkit version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Framework release.
    pub version: Version,

    /// Companion adapter package (`torch_npu`), when the framework needs one.
    #[serde(default)]
    pub torch_npu_version: Option<String>,

    /// Supported interpreter versions, oldest first.
    #[serde(deserialize_with = "validators::python_versions")]
    pub python_versions: Vec<String>,

    /// Wheel URL template with `{py_version}` and `{arch}` placeholders.
    #[serde(default)]
    pub whl_url: Option<String>,

    #[serde(default)]
    pub install_command: Option<String>,
}

impl FrameworkConfig {
    /// Pick an interpreter version.
    ///
    /// With no request the newest listed version is used. A request that is
    /// not listed fails with the supported versions in the error.
    pub fn select_python(&self, framework: &str, requested: Option<&str>) -> Result<&str, AdkError> {
        match requested {
            None => self
                .python_versions
                .last()
                .map(String::as_str)
                .ok_or_else(|| self.python_error(framework, "")),
            Some(wanted) => self
                .python_versions
                .iter()
                .find(|v| v.as_str() == wanted.trim())
                .map(String::as_str)
                .ok_or_else(|| self.python_error(framework, wanted)),
        }
    }

    fn python_error(&self, framework: &str, requested: &str) -> AdkError {
        AdkError::PythonNotSupported {
            python_version: requested.to_string(),
            framework: framework.to_string(),
            framework_version: self.version.as_str().to_string(),
            supported_versions: self.python_versions.clone(),
        }
    }

    /// Fill the wheel URL template, `None` when the config has no template.
    ///
    /// `{py_version}` receives the interpreter version with dots removed
    /// (`3.10` -> `310`), `{arch}` the canonical architecture name.
    pub fn render_whl_url(&self, python: &str, arch: CpuArch) -> Option<String> {
        let template = self.whl_url.as_deref()?;
        let compact: String = python.chars().filter(|&c| c != '.').collect();
        Some(
            template
                .replace("{py_version}", &compact)
                .replace("{arch}", arch.as_str()),
        )
    }
}

/// Requirements and framework builds for one toolkit version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannVersionEntry {
    pub min_driver_version: Version,

    #[serde(default)]
    pub max_driver_version: Option<Version>,

    #[serde(deserialize_with = "validators::non_empty_list")]
    pub supported_os: Vec<String>,

    #[serde(deserialize_with = "validators::non_empty_list")]
    pub supported_npu: Vec<String>,

    #[serde(deserialize_with = "validators::non_empty_list")]
    pub supported_arch: Vec<String>,

    #[serde(default)]
    pub frameworks: BTreeMap<String, FrameworkConfig>,

    #[serde(default)]
    pub cann_toolkit_url: Option<String>,

    #[serde(default)]
    pub kernels_url: Option<String>,

    #[serde(default)]
    pub release_notes: Option<String>,

    #[serde(default)]
    pub deprecated: bool,
}

impl CannVersionEntry {
    /// `min_driver_version <= driver <= max_driver_version` (max only when set).
    pub fn accepts_driver(&self, driver: &Version) -> bool {
        *driver >= self.min_driver_version
            && self
                .max_driver_version
                .as_ref()
                .is_none_or(|max| driver <= max)
    }

    pub fn supports_os(&self, os_name: &str) -> bool {
        self.supported_os.iter().any(|os| os == os_name)
    }

    pub fn supports_npu(&self, npu_type: &str) -> bool {
        self.supported_npu.iter().any(|npu| npu == npu_type)
    }

    pub fn supports_arch(&self, arch: &str) -> bool {
        self.supported_arch.iter().any(|a| a == arch)
    }

    /// Framework names in sorted order.
    pub fn framework_names(&self) -> Vec<String> {
        self.frameworks.keys().cloned().collect()
    }
}
