//! CLI-specific error types and exit code mapping.

use adk_core::{AdkError, PathError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Resolver or matrix error, with its own suggestions.
    #[error("{0}")]
    Adk(#[from] AdkError),

    /// A result-style query failed.
    #[error("{message}")]
    Query {
        message: String,
        suggestions: Vec<String>,
    },

    /// Writing output failed (e.g. stdout closed).
    #[error("IO error: {0}")]
    Io(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to exit code.
    ///
    /// - 1: general failure (incompatible or unknown version)
    /// - 2: invalid version strings (clap exits with 2 for bad arguments itself)
    /// - 74: IO error (`EX_IOERR`)
    /// - 78: configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Adk(AdkError::Configuration { .. }) | Self::Config(_) => 78,
            Self::Adk(AdkError::InvalidVersion(_)) => 2,
            Self::Adk(_) | Self::Query { .. } => 1,
            Self::Io(_) => 74,
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Adk(err) => err.suggestions(),
            Self::Query { suggestions, .. } => suggestions.clone(),
            Self::Io(_) | Self::Config(_) => Vec::new(),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<(String, Vec<String>)> for CliError {
    fn from((message, suggestions): (String, Vec<String>)) -> Self {
        Self::Query {
            message,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use adk_core::Version;

    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = CliError::from(AdkError::configuration("bad file", ["fix it"]));
        assert_eq!(config.exit_code(), 78);
        assert_eq!(config.suggestions(), vec!["fix it"]);

        let invalid = CliError::from(AdkError::from(Version::parse("").unwrap_err()));
        assert_eq!(invalid.exit_code(), 2);

        let missing = CliError::from(AdkError::cann_not_found("9.9.9", vec!["8.0.0".into()]));
        assert_eq!(missing.exit_code(), 1);

        let io = CliError::from(std::io::Error::from(std::io::ErrorKind::BrokenPipe));
        assert_eq!(io.exit_code(), 74);
        assert_eq!(CliError::from(PathError::NoHomeDir).exit_code(), 78);
    }

    #[test]
    fn test_query_failure_keeps_suggestions() {
        let err = CliError::from((
            "CANN version '9.9.9' not found".to_string(),
            vec!["Available versions: 8.0.0".to_string()],
        ));
        assert_eq!(err.to_string(), "CANN version '9.9.9' not found");
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.suggestions(), vec!["Available versions: 8.0.0"]);
    }
}
