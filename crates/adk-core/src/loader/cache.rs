//! Memoized matrix loading.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::SystemTime;

use super::source::{FsSource, MatrixSource};
use crate::domain::CompatibilityMatrix;
use crate::errors::{AdkError, AdkResult};
use crate::resolver::CompatibilityResolver;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    path: PathBuf,
    modified: SystemTime,
}

/// Cache of built matrices keyed by canonical path and modification time.
///
/// The cache is an ordinary value: create one per process (or per test) and
/// share it by reference. The lock covers only lookup and insert, so two
/// threads loading the same uncached file may both parse it; the first
/// insert wins and both receive the same matrix.
#[derive(Debug)]
pub struct MatrixCache<S = FsSource> {
    source: S,
    entries: Mutex<HashMap<CacheKey, Arc<CompatibilityMatrix>>>,
}

impl MatrixCache<FsSource> {
    pub fn new() -> Self {
        Self::with_source(FsSource)
    }
}

impl Default for MatrixCache<FsSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MatrixSource> MatrixCache<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, Arc<CompatibilityMatrix>>> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the matrix at `path`, reusing a cached build when the file is unchanged.
    pub fn load(&self, path: impl AsRef<Path>) -> AdkResult<CompatibilityResolver> {
        let path = path.as_ref();
        let canonical = self
            .source
            .canonicalize(path)
            .map_err(|e| io_error(path, &e))?;
        let modified = self
            .source
            .modified(&canonical)
            .map_err(|e| io_error(&canonical, &e))?;
        let key = CacheKey {
            path: canonical,
            modified,
        };

        if let Some(matrix) = self.entries().get(&key) {
            tracing::debug!(path = %key.path.display(), "compatibility matrix cache hit");
            return Ok(CompatibilityResolver::from_shared(Arc::clone(matrix)));
        }

        tracing::debug!(path = %key.path.display(), "compatibility matrix cache miss");
        let text = self
            .source
            .read_to_string(&key.path)
            .map_err(|e| io_error(&key.path, &e))?;
        let matrix = CompatibilityMatrix::from_yaml_at(&text, &key.path)?;
        tracing::info!(
            path = %key.path.display(),
            schema_version = %matrix.version(),
            cann_versions = matrix.len(),
            "loaded compatibility matrix"
        );

        let mut entries = self.entries();
        // Older builds of the same file can never be hit again.
        entries.retain(|cached, _| cached.path != key.path || cached.modified == key.modified);
        let shared = Arc::clone(entries.entry(key).or_insert_with(|| Arc::new(matrix)));
        Ok(CompatibilityResolver::from_shared(shared))
    }

    /// Drop every cached matrix.
    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

fn io_error(path: &Path, err: &io::Error) -> AdkError {
    if err.kind() == io::ErrorKind::NotFound {
        let shown = path.display();
        AdkError::configuration(
            format!("Configuration file not found: {shown}"),
            [
                format!("Ensure {shown} exists"),
                "Set ADK_MATRIX_PATH or pass --matrix to use another matrix file".to_string(),
            ],
        )
    } else {
        AdkError::configuration(
            format!("Cannot read configuration file {}: {err}", path.display()),
            ["Check that the file is readable by the current user"],
        )
    }
}
