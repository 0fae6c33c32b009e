//! Tracked-path validation.
//!
//! A path is valid when it either does not exist on disk yet, or exists as
//! a directory that svn tracks. Every mutating workflow validates the paths
//! it touches before issuing any svn call.

use crate::error::{FlowError, InvalidPathReason, Result};
use crate::tools::fs::FsAdapter;
use crate::tools::svn::SvnAdapter;
use std::path::Path;

/// Checks a root-relative path against the tracked-path validity rule.
///
/// # Errors
///
/// Returns `FlowError::InvalidPath` when the path exists but is untracked,
/// or is tracked but is not a directory.
pub fn assert_path_valid(path: &Path, fs: &dyn FsAdapter, svn: &dyn SvnAdapter) -> Result<()> {
    let full_path = svn.resolve(path);
    let tracked = svn.is_tracked(path);

    if fs.exists(&full_path) && !tracked {
        return Err(FlowError::invalid_path(path, InvalidPathReason::Untracked));
    }

    if tracked && !fs.is_dir(&full_path) {
        return Err(FlowError::invalid_path(
            path,
            InvalidPathReason::NotADirectory,
        ));
    }

    Ok(())
}

/// Checks that a root-relative path exists on disk.
///
/// # Errors
///
/// Returns `FlowError::PathNotFound` carrying the absolute path.
pub fn assert_exists(path: &Path, fs: &dyn FsAdapter, svn: &dyn SvnAdapter) -> Result<()> {
    let full_path = svn.resolve(path);
    if !fs.exists(&full_path) {
        return Err(FlowError::PathNotFound(full_path));
    }
    Ok(())
}
