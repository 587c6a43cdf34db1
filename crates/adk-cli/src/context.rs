//! Shared state handed to every command handler.

use adk_core::{CompatibilityResolver, MatrixCache, MatrixPathResolution, resolve_matrix_path};

use crate::error::CliError;

/// CLI context: the matrix override plus a cache for loaded matrices.
pub struct CliContext {
    cache: MatrixCache,
    matrix: Option<String>,
}

impl CliContext {
    pub fn new(matrix: Option<String>) -> Self {
        Self {
            cache: MatrixCache::new(),
            matrix,
        }
    }

    /// Where the matrix will be read from, honoring `--matrix` and `ADK_MATRIX_PATH`.
    pub fn matrix_path(&self) -> Result<MatrixPathResolution, CliError> {
        Ok(resolve_matrix_path(self.matrix.as_deref())?)
    }

    /// Load (or reuse) the resolver for the resolved matrix path.
    pub fn resolver(&self) -> Result<CompatibilityResolver, CliError> {
        let resolution = self.matrix_path()?;
        tracing::debug!(
            path = %resolution.path.display(),
            source = %resolution.source,
            "loading compatibility matrix"
        );
        Ok(CompatibilityResolver::from_path(&self.cache, &resolution.path)?)
    }
}
