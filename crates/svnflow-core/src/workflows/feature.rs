//! Feature branch workflows.
//!
//! A feature branch lives at `branches/feature/<name>`. It is created as a
//! copy of develop, receives the user's own commits, and is finally merged
//! back into develop. svnflow never deletes it.
//!
//! Start and finish both wrap their main svn operation in a full update
//! before and after, and commit exactly once in between. A failing step
//! aborts the workflow; earlier steps are not undone.

use crate::error::{FlowError, Result};
use crate::layout::Layout;
use crate::tools::fs::FsAdapter;
use crate::tools::svn::SvnAdapter;
use crate::workflows::commit_and_log;
use crate::workflows::validate::assert_path_valid;
use std::path::PathBuf;

/// Creates a new feature branch off develop.
///
/// This workflow:
/// 1. Fails if the feature branch directory already exists on disk
/// 2. Updates the working copy so the branch is not cut from a stale develop
/// 3. Copies `branches/develop` to `branches/feature/<name>`
/// 4. Commits `Created feature branch '<name>'.`
/// 5. Updates the working copy again
///
/// # Returns
///
/// The root-relative path of the new branch.
///
/// # Errors
///
/// Returns:
/// - `FlowError::InvalidFeatureName` if `name` is not a single path component
/// - `FlowError::AlreadyExists` if the branch directory exists (no svn call is made)
/// - `FlowError::SvnCommandFailed` if any svn call fails
#[tracing::instrument(skip_all, fields(feature = name))]
pub fn start_feature(
    layout: &Layout,
    name: &str,
    fs: &dyn FsAdapter,
    svn: &dyn SvnAdapter,
) -> Result<PathBuf> {
    let feature_branch = layout.feature_branch(name)?;

    if fs.exists(&svn.resolve(&feature_branch)) {
        return Err(FlowError::AlreadyExists(feature_branch));
    }

    svn.update_all()?;
    svn.branch(&layout.develop, &feature_branch)?;
    commit_and_log(svn, &format!("Created feature branch '{}'.", name))?;
    svn.update_all()?;

    Ok(feature_branch)
}

/// Merges a feature branch back into develop.
///
/// This workflow:
/// 1. Validates the feature branch path
/// 2. Updates the working copy
/// 3. Merges `branches/feature/<name>` into `branches/develop` (plain merge,
///    not reintegration, so the branch can be merged again later)
/// 4. Commits `Merged feature '<name>' to develop.`
/// 5. Updates the working copy again
///
/// A branch missing on disk passes validation; svn itself then rejects the
/// merge.
///
/// # Errors
///
/// Returns:
/// - `FlowError::InvalidFeatureName` if `name` is not a single path component
/// - `FlowError::InvalidPath` if the branch exists but is untracked or not a directory
/// - `FlowError::SvnCommandFailed` if any svn call fails
#[tracing::instrument(skip_all, fields(feature = name))]
pub fn finish_feature(
    layout: &Layout,
    name: &str,
    fs: &dyn FsAdapter,
    svn: &dyn SvnAdapter,
) -> Result<()> {
    let feature_branch = layout.feature_branch(name)?;
    assert_path_valid(&feature_branch, fs, svn)?;

    if !fs.exists(&svn.resolve(&feature_branch)) {
        tracing::warn!(
            branch = %feature_branch.display(),
            "feature branch not found in working copy"
        );
    }

    svn.update_all()?;
    svn.merge(&feature_branch, &layout.develop, false)?;
    commit_and_log(svn, &format!("Merged feature '{}' to develop.", name))?;
    svn.update_all()?;

    Ok(())
}

/// Lists feature branch names as svn reports them.
///
/// Only directory entries of `branches/feature` count. When that directory
/// does not exist yet the list is empty and svn is not queried.
///
/// # Errors
///
/// Returns:
/// - `FlowError::InvalidPath` if `branches/feature` is untracked or not a directory
/// - `FlowError::SvnCommandFailed` if `svn list` fails
pub fn list_features(
    layout: &Layout,
    fs: &dyn FsAdapter,
    svn: &dyn SvnAdapter,
) -> Result<Vec<String>> {
    assert_path_valid(&layout.feature, fs, svn)?;

    if !fs.exists(&svn.resolve(&layout.feature)) {
        return Ok(Vec::new());
    }

    let names = svn
        .list_entries(&layout.feature)?
        .into_iter()
        .filter_map(|entry| entry.strip_suffix('/').map(str::to_string))
        .collect();

    Ok(names)
}
