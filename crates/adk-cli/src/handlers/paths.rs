//! Paths command handler.
//!
//! Displays the resolved matrix location for diagnosing "which file is
//! being read" problems.

use std::fmt;
use std::path::PathBuf;

use adk_core::{MatrixPathResolution, data_root};
use anyhow::Result;

use super::Outcome;
use crate::context::CliContext;
use crate::error::CliError;
use crate::presentation::print_text;

#[derive(Debug)]
pub struct PathsReport {
    pub matrix: MatrixPathResolution,
    pub data_root: PathBuf,
    pub exists: bool,
}

impl PathsReport {
    pub fn resolve(ctx: &CliContext) -> Result<Self> {
        let matrix = ctx.matrix_path()?;
        let exists = matrix.path.is_file();
        Ok(Self {
            matrix,
            data_root: data_root().map_err(CliError::from)?,
            exists,
        })
    }
}

impl fmt::Display for PathsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "matrix_path = {}", self.matrix.path.display())?;
        writeln!(f, "source = {}", self.matrix.source)?;
        writeln!(f, "data_root = {}", self.data_root.display())?;
        write!(f, "exists = {}", self.exists)
    }
}

/// Execute the paths command.
pub fn execute(ctx: &CliContext) -> Result<Outcome> {
    let report = PathsReport::resolve(ctx)?;
    print_text(&format!("{report}\n"))?;
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::handlers::test_support::{MATRIX_YAML, write_matrix};

    #[test]
    fn test_report_for_explicit_matrix() {
        let dir = TempDir::new().unwrap();
        let path = write_matrix(dir.path(), MATRIX_YAML);
        let ctx = CliContext::new(Some(path.display().to_string()));

        let report = PathsReport::resolve(&ctx).unwrap();
        assert!(report.exists);

        let text = report.to_string();
        assert!(text.contains("source = explicit"));
        assert!(text.contains("exists = true"));
        assert!(text.contains(&format!("matrix_path = {}", path.display())));
    }

    #[test]
    fn test_missing_matrix_still_reports() {
        let dir = TempDir::new().unwrap();
        let ctx = CliContext::new(Some(dir.path().join("gone.yaml").display().to_string()));

        let report = PathsReport::resolve(&ctx).unwrap();
        assert!(!report.exists);
        assert!(report.to_string().ends_with("exists = false"));
    }
}
