//! Path utilities for locating the compatibility matrix.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Never touches the filesystem beyond existence checks; the loader
//!   reports missing or unreadable files
//! - Checkout detection is kept private in `platform`

mod error;
mod matrix;
mod platform;

#[cfg(test)]
mod test_utils;

pub use error::PathError;

pub use platform::{DATA_DIR_ENV, data_root};

pub use matrix::{
    BUNDLED_MATRIX_RELATIVE, MATRIX_PATH_ENV, MatrixPathResolution, MatrixPathSource,
    default_matrix_path, resolve_matrix_path,
};
