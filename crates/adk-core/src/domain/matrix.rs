//! The compatibility matrix and its construction gate.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entry::{CannVersionEntry, FrameworkConfig};
use crate::errors::{AdkError, AdkResult};
use crate::version::Version;

/// Raised when a document declares no toolkit versions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cann_versions must contain at least one entry")]
pub struct EmptyMatrixError;

/// Wire shape of the matrix document before the whole-document checks.
#[derive(Deserialize)]
struct MatrixDocument {
    version: Version,
    last_updated: String,
    cann_versions: BTreeMap<String, CannVersionEntry>,
}

impl TryFrom<MatrixDocument> for CompatibilityMatrix {
    type Error = EmptyMatrixError;

    fn try_from(doc: MatrixDocument) -> Result<Self, Self::Error> {
        if doc.cann_versions.is_empty() {
            return Err(EmptyMatrixError);
        }
        Ok(Self {
            version: doc.version,
            last_updated: doc.last_updated,
            cann_versions: doc.cann_versions,
        })
    }
}

/// Validated, immutable compatibility matrix.
///
/// Deserialization is the only way to build one, and it either yields a
/// fully valid matrix or fails. Keys of `cann_versions` are the toolkit
/// version strings exactly as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixDocument")]
pub struct CompatibilityMatrix {
    version: Version,
    last_updated: String,
    cann_versions: BTreeMap<String, CannVersionEntry>,
}

impl CompatibilityMatrix {
    /// Build a matrix from YAML (or JSON) text.
    pub fn from_yaml_str(text: &str) -> AdkResult<Self> {
        Self::parse(text, None)
    }

    /// Build a matrix from text read from `origin`, naming it in errors.
    pub(crate) fn from_yaml_at(text: &str, origin: &Path) -> AdkResult<Self> {
        Self::parse(text, Some(origin))
    }

    fn parse(text: &str, origin: Option<&Path>) -> AdkResult<Self> {
        // Syntax first, so a malformed document and a schema violation
        // produce different diagnostics.
        if let Err(e) = serde_yaml::from_str::<serde_yaml::Value>(text) {
            let message = match origin {
                Some(path) => format!("Invalid YAML format in {}: {e}", path.display()),
                None => format!("Invalid YAML format: {e}"),
            };
            return Err(AdkError::configuration(
                message,
                ["Check YAML syntax", "Validate file encoding is UTF-8"],
            ));
        }

        serde_yaml::from_str::<Self>(text).map_err(|e| {
            AdkError::configuration(
                format!("Invalid configuration schema: {e}"),
                ["Check field types and required fields"],
            )
        })
    }

    /// Schema version of the document.
    pub const fn version(&self) -> &Version {
        &self.version
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }

    /// `last_updated` as a date, `None` unless it is `YYYY-MM-DD`.
    pub fn last_updated_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.last_updated.trim(), "%Y-%m-%d").ok()
    }

    /// Exact keyed lookup.
    pub fn get_cann_version(&self, version: &str) -> Option<&CannVersionEntry> {
        self.cann_versions.get(version)
    }

    /// Every toolkit version key. Order is unspecified.
    pub fn list_cann_versions(&self) -> Vec<&str> {
        self.cann_versions.keys().map(String::as_str).collect()
    }

    /// Framework names for a toolkit version, empty when the version is absent.
    pub fn list_frameworks(&self, version: &str) -> Vec<&str> {
        self.cann_versions
            .get(version)
            .map(|entry| entry.frameworks.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn framework(&self, version: &str, framework: &str) -> Option<&FrameworkConfig> {
        self.cann_versions.get(version)?.frameworks.get(framework)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &CannVersionEntry)> {
        self.cann_versions.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cann_versions.len()
    }

    /// Always false for a constructed matrix.
    pub fn is_empty(&self) -> bool {
        self.cann_versions.is_empty()
    }
}
