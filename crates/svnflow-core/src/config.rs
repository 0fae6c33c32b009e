//! Configuration types for svnflow.
//!
//! This module defines the configuration structures used throughout svnflow:
//! the repository root, the canonical layout, and svn client settings. The
//! optional `.svnflow.toml` file in the repository root can override the
//! client settings; the root and the layout are always derived.

use crate::error::{FlowError, Result};
use crate::layout::Layout;
use serde::Deserialize;
use std::path::PathBuf;

/// Name of the optional configuration file in the repository root.
pub const CONFIG_FILE_NAME: &str = ".svnflow.toml";

/// Main svnflow configuration.
///
/// Immutable once built; the runtime receives it at construction and never
/// changes it.
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Working copy root directory (absolute path).
    pub repo_root: PathBuf,

    /// Path to the configuration file (`.svnflow.toml`), whether or not it exists.
    pub config_file: PathBuf,

    /// Canonical repository layout.
    pub layout: Layout,

    /// svn client settings.
    pub svn: SvnConfig,
}

impl FlowConfig {
    /// Creates a new configuration with defaults.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - The working copy root directory (must be absolute path).
    pub fn new(repo_root: PathBuf) -> Self {
        Self {
            config_file: repo_root.join(CONFIG_FILE_NAME),
            repo_root,
            layout: Layout::default(),
            svn: SvnConfig::default(),
        }
    }

    /// Loads configuration for the given root, applying `.svnflow.toml` if present.
    ///
    /// A missing file yields defaults. Keys absent from the file keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::ConfigParseError` if the file is not valid TOML or
    /// has values of the wrong type, or `FlowError::Io` if it cannot be read.
    pub fn load(repo_root: PathBuf) -> Result<Self> {
        let mut config = Self::new(repo_root);

        if !config.config_file.is_file() {
            tracing::debug!(
                path = %config.config_file.display(),
                "no config file, using defaults"
            );
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config.config_file)?;

        let file: ConfigFile = toml::from_str(&content).map_err(|e| {
            FlowError::ConfigParseError(format!("{}: {}", config.config_file.display(), e))
        })?;

        config.svn = file.svn;
        Ok(config)
    }
}

/// svn client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SvnConfig {
    /// Client executable name or path.
    pub binary: String,

    /// Whether to pass `--non-interactive` to every invocation.
    pub non_interactive: bool,
}

impl Default for SvnConfig {
    fn default() -> Self {
        Self {
            binary: "svn".to_string(),
            non_interactive: true,
        }
    }
}

/// On-disk shape of `.svnflow.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    svn: SvnConfig,
}
