//! Compatibility matrix location.

use std::env;
use std::fmt;
use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, normalize_user_path};

/// Environment variable pointing at a matrix file.
pub const MATRIX_PATH_ENV: &str = "ADK_MATRIX_PATH";

/// Location of the bundled matrix relative to the data root.
pub const BUNDLED_MATRIX_RELATIVE: &str = "data/compatibility.yaml";

/// How the matrix path was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixPathSource {
    /// The caller passed a path (e.g. `--matrix`).
    Explicit,
    /// `ADK_MATRIX_PATH`, possibly from `.env`.
    EnvVar,
    /// `<data root>/data/compatibility.yaml`.
    Default,
}

impl fmt::Display for MatrixPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Explicit => "explicit",
            Self::EnvVar => "environment",
            Self::Default => "default",
        })
    }
}

/// Resolution result for the matrix path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixPathResolution {
    pub path: PathBuf,
    pub source: MatrixPathSource,
}

/// The bundled matrix under the data root.
pub fn default_matrix_path() -> Result<PathBuf, PathError> {
    Ok(data_root()?.join(BUNDLED_MATRIX_RELATIVE))
}

/// Resolve the matrix path from an explicit override, env var, or default.
///
/// Resolution order:
/// 1. Explicit path provided by caller
/// 2. `ADK_MATRIX_PATH` environment variable
/// 3. [`default_matrix_path`]
///
/// The file is not required to exist; loading reports a missing file.
pub fn resolve_matrix_path(explicit: Option<&str>) -> Result<MatrixPathResolution, PathError> {
    if let Some(path_str) = explicit {
        return Ok(MatrixPathResolution {
            path: normalize_user_path(path_str)?,
            source: MatrixPathSource::Explicit,
        });
    }

    if let Ok(env_path) = env::var(MATRIX_PATH_ENV) {
        if !env_path.trim().is_empty() {
            return Ok(MatrixPathResolution {
                path: normalize_user_path(&env_path)?,
                source: MatrixPathSource::EnvVar,
            });
        }
    }

    Ok(MatrixPathResolution {
        path: default_matrix_path()?,
        source: MatrixPathSource::Default,
    })
}
