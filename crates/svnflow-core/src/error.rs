//! Error types for svnflow operations.
//!
//! This module defines the error variants that can occur while bootstrapping
//! the repository layout, checking its health, or running feature workflows.
//! All errors use `thiserror` for ergonomic error handling with context.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a path failed the tracked-path validity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPathReason {
    /// The path exists on disk but svn does not know about it.
    Untracked,

    /// svn tracks the path but it is not a directory on disk.
    NotADirectory,
}

impl fmt::Display for InvalidPathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untracked => f.write_str("is not tracked by SVN"),
            Self::NotADirectory => f.write_str("is not a directory"),
        }
    }
}

/// Error types for svnflow operations.
///
/// Each variant represents a specific failure mode with relevant context,
/// enabling precise error handling and user-friendly error messages.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FlowError {
    // Layout errors
    /// A canonical or feature path is inconsistent with svn tracking.
    #[error("'{}' {reason}.", path.display())]
    InvalidPath {
        /// Repository-relative path that failed validation.
        path: PathBuf,
        /// Which half of the validity rule was violated.
        reason: InvalidPathReason,
    },

    /// A required path is missing on disk.
    #[error("'{}' does not exist.", .0.display())]
    PathNotFound(PathBuf),

    // Feature errors
    /// Feature branch directory already exists on disk.
    #[error("Feature branch '{}' already exists.", .0.display())]
    AlreadyExists(PathBuf),

    /// Feature name is not a single plain path component.
    #[error("invalid feature name: '{0}' (must be a single path component)")]
    InvalidFeatureName(String),

    // Tool errors
    /// The svn client exited non-zero or could not be started.
    #[error("svn command failed: {0}")]
    SvnCommandFailed(String),

    // Config errors
    /// Error parsing the configuration file.
    #[error("config parse error: {0}")]
    ConfigParseError(String),

    // IO and system errors
    /// Standard IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context from anyhow.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl FlowError {
    /// Shorthand for an [`FlowError::InvalidPath`] error.
    pub fn invalid_path(path: impl Into<PathBuf>, reason: InvalidPathReason) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason,
        }
    }
}

/// Result type alias for svnflow operations.
///
/// All fallible svnflow operations return this type, using [`FlowError`] for error variants.
pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_messages() {
        let untracked = FlowError::invalid_path("trunk", InvalidPathReason::Untracked);
        assert_eq!(untracked.to_string(), "'trunk' is not tracked by SVN.");

        let not_dir = FlowError::invalid_path("branches/feature", InvalidPathReason::NotADirectory);
        assert_eq!(not_dir.to_string(), "'branches/feature' is not a directory.");
    }

    #[test]
    fn test_already_exists_message() {
        let err = FlowError::AlreadyExists(PathBuf::from("branches/feature/login"));
        assert_eq!(
            err.to_string(),
            "Feature branch 'branches/feature/login' already exists."
        );
    }
}
