//! Runtime for svnflow workflows.
//!
//! This module provides the `FlowRuntime` struct, the workflow engine's
//! entry point. It owns the immutable configuration and the tool adapters
//! and forwards each operation to the matching workflow.

use crate::config::FlowConfig;
use crate::error::Result;
use crate::tools::ToolRegistry;
use crate::tools::fs_impl::StdFsAdapter;
use crate::tools::svn_impl::StdSvnAdapter;
use crate::workflows::{self, HealthReport, InitSummary};
use std::path::PathBuf;

/// Workflow engine bound to one svn working copy.
///
/// # Examples
///
/// ```no_run
/// use svnflow_core::{FlowConfig, FlowRuntime};
/// use std::path::PathBuf;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FlowConfig::load(PathBuf::from("/path/to/wc"))?;
/// let runtime = FlowRuntime::new(config);
///
/// runtime.init()?;
/// runtime.start_feature("login")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FlowRuntime {
    /// svnflow configuration.
    pub config: FlowConfig,

    /// Tool registry for file system and svn operations.
    pub tools: ToolRegistry,
}

impl FlowRuntime {
    /// Creates a runtime that drives the real svn client.
    pub fn new(config: FlowConfig) -> Self {
        let tools = ToolRegistry::new(
            Box::new(StdFsAdapter::new()),
            Box::new(StdSvnAdapter::new(config.repo_root.clone(), &config.svn)),
        );
        Self::with_tools(config, tools)
    }

    /// Creates a runtime with caller-provided adapters.
    pub fn with_tools(config: FlowConfig, tools: ToolRegistry) -> Self {
        Self { config, tools }
    }

    /// Bootstraps the canonical layout (`svnflow init`).
    ///
    /// See [`workflows::init_layout`].
    pub fn init(&self) -> Result<InitSummary> {
        workflows::init_layout(&self.config.layout, &*self.tools.fs, &*self.tools.svn)
    }

    /// Checks the layout without changing anything (`svnflow test`).
    ///
    /// See [`workflows::check_layout`].
    pub fn check_layout(&self) -> HealthReport {
        workflows::check_layout(&self.config.layout, &*self.tools.fs, &*self.tools.svn)
    }

    /// Creates `branches/feature/<name>` off develop (`svnflow feature start`).
    ///
    /// See [`workflows::start_feature`].
    pub fn start_feature(&self, name: &str) -> Result<PathBuf> {
        workflows::start_feature(
            &self.config.layout,
            name,
            &*self.tools.fs,
            &*self.tools.svn,
        )
    }

    /// Merges `branches/feature/<name>` into develop (`svnflow feature finish`).
    ///
    /// See [`workflows::finish_feature`].
    pub fn finish_feature(&self, name: &str) -> Result<()> {
        workflows::finish_feature(
            &self.config.layout,
            name,
            &*self.tools.fs,
            &*self.tools.svn,
        )
    }

    /// Lists feature branch names (`svnflow feature list`).
    ///
    /// See [`workflows::list_features`].
    pub fn list_features(&self) -> Result<Vec<String>> {
        workflows::list_features(&self.config.layout, &*self.tools.fs, &*self.tools.svn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fs_mock::MockFsAdapter;
    use crate::tools::svn_mock::MockSvnAdapter;
    use std::path::Path;

    fn mock_runtime() -> (FlowRuntime, MockSvnAdapter) {
        let fs = MockFsAdapter::new();
        let svn = MockSvnAdapter::new("/wc", fs.clone());
        let tools = ToolRegistry::new(Box::new(fs), Box::new(svn.clone()));
        let runtime = FlowRuntime::with_tools(FlowConfig::new(PathBuf::from("/wc")), tools);
        (runtime, svn)
    }

    #[test]
    fn test_new_runtime_binds_root() {
        let runtime = FlowRuntime::new(FlowConfig::new(PathBuf::from("/wc")));

        assert_eq!(runtime.tools.svn.root(), Path::new("/wc"));
    }

    #[test]
    fn test_runtime_forwards_to_workflows() {
        let (runtime, svn) = mock_runtime();

        runtime.init().unwrap();
        assert!(runtime.check_layout().passed());

        runtime.start_feature("login").unwrap();
        runtime.finish_feature("login").unwrap();

        assert_eq!(runtime.list_features().unwrap(), vec!["login"]);
        assert_eq!(svn.command_count("merge"), 1);
    }
}
