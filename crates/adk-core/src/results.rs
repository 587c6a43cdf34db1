//! Result envelopes returned by the non-raising resolver methods.
//!
//! Field names are part of the JSON contract consumed by scripts and CI, so
//! renaming a field here is a breaking change.

use serde::{Deserialize, Serialize};

use crate::domain::{CannVersionEntry, FrameworkConfig};
use crate::errors::AdkError;

/// Outcome of a point query. Never an `Err`; failures carry suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl<T> QueryResult<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            suggestions: Vec::new(),
        }
    }

    pub fn failure(error: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            suggestions,
        }
    }

    /// Convert into a `Result`, keeping the error text and suggestions.
    pub fn into_result(self) -> Result<T, (String, Vec<String>)> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err((self.error.unwrap_or_default(), self.suggestions)),
        }
    }
}

impl<T> From<AdkError> for QueryResult<T> {
    fn from(err: AdkError) -> Self {
        Self::failure(err.message(), err.suggestions())
    }
}

/// Requirements payload for `get_cann_requirements`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannRequirements {
    pub cann_version: String,
    pub min_driver_version: String,
    pub max_driver_version: Option<String>,
    pub supported_os: Vec<String>,
    pub supported_npu: Vec<String>,
    pub supported_arch: Vec<String>,
    /// Framework names only; use a framework query for details.
    pub frameworks: Vec<String>,
    pub deprecated: bool,
}

impl CannRequirements {
    pub fn from_entry(cann_version: &str, entry: &CannVersionEntry) -> Self {
        Self {
            cann_version: cann_version.to_string(),
            min_driver_version: entry.min_driver_version.as_str().to_string(),
            max_driver_version: entry
                .max_driver_version
                .as_ref()
                .map(|v| v.as_str().to_string()),
            supported_os: entry.supported_os.clone(),
            supported_npu: entry.supported_npu.clone(),
            supported_arch: entry.supported_arch.clone(),
            frameworks: entry.framework_names(),
            deprecated: entry.deprecated,
        }
    }
}

/// Framework payload for `find_framework_config`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkDetails {
    pub framework: String,
    pub version: String,
    pub torch_npu_version: Option<String>,
    pub python_versions: Vec<String>,
    pub whl_url: Option<String>,
    pub install_command: Option<String>,
}

impl FrameworkDetails {
    pub fn from_config(framework: &str, config: &FrameworkConfig) -> Self {
        Self {
            framework: framework.to_string(),
            version: config.version.as_str().to_string(),
            torch_npu_version: config.torch_npu_version.clone(),
            python_versions: config.python_versions.clone(),
            whl_url: config.whl_url.clone(),
            install_command: config.install_command.clone(),
        }
    }
}

/// Outcome of `validate_environment`.
///
/// `errors` is non-empty exactly when `valid` is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// Passing toolkit versions, newest first.
    pub compatible_cann_versions: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Newest passing toolkit version.
    pub fn recommended(&self) -> Option<&str> {
        self.compatible_cann_versions.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_result_json_keys() {
        let ok = QueryResult::ok(42_u32);
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json["error"].is_null());
        assert_eq!(json["suggestions"], serde_json::json!([]));

        let failed: QueryResult<u32> =
            QueryResult::failure("nope", vec!["try again".to_string()]);
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "nope");
        assert_eq!(json["suggestions"][0], "try again");
    }

    #[test]
    fn test_query_result_from_error() {
        let result: QueryResult<()> =
            AdkError::cann_not_found("1.0", vec!["8.0.0".to_string()]).into();
        assert!(!result.success);
        assert_eq!(
            result.into_result().unwrap_err().1,
            vec!["Available CANN versions: 8.0.0".to_string()]
        );
    }

    #[test]
    fn test_validation_result_keys() {
        let result = ValidationResult {
            valid: true,
            compatible_cann_versions: vec!["8.0.0".into(), "7.0.0".into()],
            errors: Vec::new(),
            warnings: vec!["CANN 7.0.0 is deprecated".into()],
        };
        assert_eq!(result.recommended(), Some("8.0.0"));
        let json = serde_json::to_value(&result).unwrap();
        for key in ["valid", "compatible_cann_versions", "errors", "warnings"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
