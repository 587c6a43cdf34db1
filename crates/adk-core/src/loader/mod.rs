//! Building resolvers from matrix files.

mod cache;
mod source;

pub use cache::MatrixCache;
pub use source::{FsSource, MatrixSource};

use std::path::Path;

use crate::errors::AdkResult;
use crate::resolver::CompatibilityResolver;

impl CompatibilityResolver {
    /// Load a resolver through `cache`.
    pub fn from_path<S: MatrixSource>(
        cache: &MatrixCache<S>,
        path: impl AsRef<Path>,
    ) -> AdkResult<Self> {
        cache.load(path)
    }
}
