use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where matrix bytes and their identity come from.
///
/// The cache only needs three facts about a source file. Keeping them behind
/// a trait lets tests count reads without touching the filesystem.
#[cfg_attr(test, mockall::automock)]
pub trait MatrixSource: Send + Sync {
    /// Stable identity for the path (symlinks and `..` resolved).
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// Last modification time.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// [`MatrixSource`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl MatrixSource for FsSource {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
