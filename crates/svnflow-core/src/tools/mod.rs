//! Tool adapters and registry for svnflow workflows.
//!
//! This module provides the tool registry that holds the adapters the
//! workflow engine talks to: the svn gateway and the file system probe.
//! Each adapter trait has a real implementation and an in-memory mock.

pub mod fs;
pub mod fs_impl;
pub mod fs_mock;
pub mod svn;
pub mod svn_impl;
pub mod svn_mock;

/// Tool registry that manages all available adapters.
///
/// Adapters are trait objects to allow for different implementations
/// (e.g., real vs. mock).
pub struct ToolRegistry {
    /// File system adapter for existence checks.
    pub fs: Box<dyn fs::FsAdapter>,

    /// svn adapter bound to the working copy root.
    pub svn: Box<dyn svn::SvnAdapter>,
}

impl ToolRegistry {
    /// Creates a new tool registry with the provided adapters.
    pub fn new(fs: Box<dyn fs::FsAdapter>, svn: Box<dyn svn::SvnAdapter>) -> Self {
        Self { fs, svn }
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("fs", &"Box<dyn FsAdapter>")
            .field("svn", &self.svn.root())
            .finish()
    }
}
