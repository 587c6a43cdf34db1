//! Error taxonomy for matrix loading and compatibility assertions.
//!
//! Every variant carries the structured facts behind the failure (the
//! offending value and what would have been accepted) and produces a list of
//! actionable suggestions. Adapters render both: the CLI prints the
//! suggestions under the message, JSON consumers receive an [`ErrorReport`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::InvalidVersionError;

/// Which driver bound was violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverBound {
    /// Driver is older than the entry's `min_driver_version`.
    Minimum(String),
    /// Driver is newer than the entry's `max_driver_version`.
    Maximum(String),
}

impl fmt::Display for DriverBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimum(min) => write!(f, "Minimum required driver version is '{min}'."),
            Self::Maximum(max) => write!(f, "Maximum supported driver version is '{max}'."),
        }
    }
}

/// Errors raised by matrix loading and the assertion-style resolver methods.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdkError {
    /// The matrix source is missing, unreadable, or violates the schema.
    #[error("{message}")]
    Configuration {
        message: String,
        suggestions: Vec<String>,
    },

    /// A requested toolkit version is not in the matrix.
    #[error("{version_type} version '{version}' not found in compatibility matrix.")]
    VersionNotFound {
        version_type: String,
        version: String,
        available_versions: Vec<String>,
    },

    /// The driver falls outside the entry's supported range.
    #[error("Driver version '{driver_version}' is incompatible with CANN {cann_version}. {bound}")]
    DriverIncompatible {
        driver_version: String,
        cann_version: String,
        bound: DriverBound,
    },

    /// The OS is not in the entry's supported set.
    #[error("OS '{os_name}' is not supported for CANN {cann_version}.")]
    OsNotSupported {
        os_name: String,
        cann_version: String,
        supported_os: Vec<String>,
    },

    /// The NPU type is not in the entry's supported set.
    #[error("NPU type '{npu_type}' is not supported for CANN {cann_version}.")]
    NpuNotSupported {
        npu_type: String,
        cann_version: String,
        supported_npu: Vec<String>,
    },

    /// The framework has no configuration for this toolkit version.
    #[error("Framework '{framework}' is not available for CANN {cann_version}.")]
    FrameworkNotFound {
        framework: String,
        cann_version: String,
        available_frameworks: Vec<String>,
    },

    /// The requested interpreter is not listed for the framework.
    #[error("Python {python_version} is not supported for {framework} {framework_version}.")]
    PythonNotSupported {
        python_version: String,
        framework: String,
        framework_version: String,
        supported_versions: Vec<String>,
    },

    /// A version argument did not parse.
    #[error(transparent)]
    InvalidVersion(#[from] InvalidVersionError),
}

/// Convenience result type for resolver operations.
pub type AdkResult<T> = Result<T, AdkError>;

impl AdkError {
    /// Create a configuration error with suggestions.
    pub fn configuration<I, S>(message: impl Into<String>, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Configuration {
            message: message.into(),
            suggestions: suggestions.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a not-found error for a CANN version.
    pub fn cann_not_found(version: impl Into<String>, available_versions: Vec<String>) -> Self {
        Self::VersionNotFound {
            version_type: "CANN".to_string(),
            version: version.into(),
            available_versions,
        }
    }

    /// The human-readable message, without suggestions.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Actionable suggestions for resolving the error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Configuration { suggestions, .. } => suggestions.clone(),
            Self::VersionNotFound {
                version_type,
                available_versions,
                ..
            } => {
                if available_versions.is_empty() {
                    Vec::new()
                } else {
                    vec![format!(
                        "Available {version_type} versions: {}",
                        available_versions.join(", ")
                    )]
                }
            }
            Self::DriverIncompatible {
                driver_version,
                bound: DriverBound::Minimum(min),
                ..
            } => vec![
                format!("Upgrade your driver to version {min} or later"),
                format!(
                    "Or pick an older CANN release: `adk compatible --driver {driver_version}`"
                ),
                "See the driver upgrade guide at https://www.hiascend.com".to_string(),
            ],
            Self::DriverIncompatible {
                driver_version,
                bound: DriverBound::Maximum(max),
                ..
            } => vec![
                format!("Use a driver no newer than {max} for this CANN version"),
                format!(
                    "Or pick a newer CANN release: `adk compatible --driver {driver_version}`"
                ),
            ],
            Self::OsNotSupported { supported_os, .. } => vec![format!(
                "Supported operating systems: {}",
                supported_os.join(", ")
            )],
            Self::NpuNotSupported { supported_npu, .. } => vec![format!(
                "Supported NPU types: {}",
                supported_npu.join(", ")
            )],
            Self::FrameworkNotFound {
                available_frameworks,
                ..
            } => {
                if available_frameworks.is_empty() {
                    Vec::new()
                } else {
                    vec![format!(
                        "Available frameworks: {}",
                        available_frameworks.join(", ")
                    )]
                }
            }
            Self::PythonNotSupported {
                supported_versions,
                ..
            } => vec![format!(
                "Supported Python versions: {}",
                supported_versions.join(", ")
            )],
            Self::InvalidVersion(_) => vec![
                "Use a dotted numeric version such as 24.1.0 or 24.1.rc1".to_string(),
            ],
        }
    }

    /// Stable machine-readable tag for the error kind.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::VersionNotFound { .. } => "version_not_found",
            Self::DriverIncompatible { .. } => "driver_incompatible",
            Self::OsNotSupported { .. } => "os_not_supported",
            Self::NpuNotSupported { .. } => "npu_not_supported",
            Self::FrameworkNotFound { .. } => "framework_not_found",
            Self::PythonNotSupported { .. } => "python_not_supported",
            Self::InvalidVersion(_) => "invalid_version",
        }
    }

    /// Single-predicate mismatches (driver, OS, NPU).
    pub const fn is_compatibility_error(&self) -> bool {
        matches!(
            self,
            Self::DriverIncompatible { .. }
                | Self::OsNotSupported { .. }
                | Self::NpuNotSupported { .. }
        )
    }

    /// Message followed by an indented suggestion block.
    pub fn render(&self) -> String {
        let mut out = self.message();
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\n\nSuggestions:\n");
            for suggestion in suggestions {
                out.push_str("  - ");
                out.push_str(&suggestion);
                out.push('\n');
            }
        }
        out
    }

    /// Serializable snapshot for JSON output.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind().to_string(),
            error: self.message(),
            suggestions: self.suggestions(),
        }
    }
}

/// Serializable form of an [`AdkError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: String,
    pub error: String,
    pub suggestions: Vec<String>,
}

impl From<&AdkError> for ErrorReport {
    fn from(err: &AdkError) -> Self {
        err.report()
    }
}
