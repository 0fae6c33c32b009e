//! svn adapter trait and operations.
//!
//! This module defines the `SvnAdapter` trait, the gateway between the
//! workflow engine and the svn client. An adapter is bound to one working
//! copy root, and every path it accepts is relative to that root. Adapters
//! carry no policy: they never check preconditions and never interpret why
//! the client failed.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// svn adapter trait.
///
/// Implementations can execute the real svn client or provide mocked
/// behavior for testing.
pub trait SvnAdapter: Send + Sync {
    /// Working copy root this adapter resolves paths against.
    fn root(&self) -> &Path;

    /// Returns the absolute path for a root-relative path.
    ///
    /// Pure path join, no I/O.
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }

    /// Schedules a new tracked directory (`svn mkdir`).
    ///
    /// Does not check whether the directory already exists.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::SvnCommandFailed` if the client fails.
    fn create_directory(&self, path: &Path) -> Result<()>;

    /// Commits every pending change in the working copy.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::SvnCommandFailed` if the client fails.
    fn commit(&self, message: &str) -> Result<()>;

    /// Creates `target` as a cheap copy of `source` (`svn copy`).
    ///
    /// # Errors
    ///
    /// Returns `FlowError::SvnCommandFailed` if the client fails.
    fn branch(&self, source: &Path, target: &Path) -> Result<()>;

    /// Merges changes from `source` into the working copy at `dest`.
    ///
    /// `reintegrate` requests svn's one-way reintegration mode, which marks
    /// the source as fully merged.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::SvnCommandFailed` if the client fails.
    fn merge(&self, source: &Path, dest: &Path, reintegrate: bool) -> Result<()>;

    /// Recursively updates the whole working copy to the latest revision.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::SvnCommandFailed` if the client fails.
    fn update_all(&self) -> Result<()>;

    /// Lists the tracked direct children of `path`, in svn's order.
    ///
    /// Directory entries keep svn's trailing `/`. An empty path lists the root.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::SvnCommandFailed` if the client fails.
    fn list_entries(&self, path: &Path) -> Result<Vec<String>>;

    /// Checks whether svn knows about `path`.
    ///
    /// Any failure of the underlying query counts as "not tracked".
    fn is_tracked(&self, path: &Path) -> bool;
}
