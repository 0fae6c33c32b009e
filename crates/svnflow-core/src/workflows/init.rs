//! Layout bootstrap workflow.
//!
//! Creates whichever canonical directories are missing, committing each one
//! separately, then updates the working copy once. Directories that already
//! exist are left alone, so running it again is a no-op apart from the
//! final update.

use crate::error::Result;
use crate::layout::{CreateKind, Layout};
use crate::tools::fs::FsAdapter;
use crate::tools::svn::SvnAdapter;
use crate::workflows::commit_and_log;
use crate::workflows::validate::assert_path_valid;
use std::path::PathBuf;

/// What `init_layout` did to each canonical directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitSummary {
    /// Directories created in this run, in creation order.
    pub created: Vec<PathBuf>,

    /// Directories that already existed.
    pub skipped: Vec<PathBuf>,
}

/// Bootstraps the canonical layout in the working copy.
///
/// This workflow, for each directory of [`Layout::init_plan`] in order:
/// 1. Validates the path (absent, or a tracked directory)
/// 2. If absent, creates it (`develop` as a copy of trunk) and commits
/// 3. If present, logs and skips it
///
/// and finishes with a single `svn update` of the whole working copy.
///
/// # Errors
///
/// Returns:
/// - `FlowError::InvalidPath` if a canonical path is untracked or not a directory
/// - `FlowError::SvnCommandFailed` if any svn call fails
///
/// Steps already committed are not rolled back.
///
/// # Examples
///
/// ```
/// use svnflow_core::Layout;
/// use svnflow_core::tools::fs_mock::MockFsAdapter;
/// use svnflow_core::tools::svn_mock::MockSvnAdapter;
/// use svnflow_core::workflows;
///
/// let fs = MockFsAdapter::new();
/// let svn = MockSvnAdapter::new("/wc", fs.clone());
///
/// let summary = workflows::init_layout(&Layout::default(), &fs, &svn).unwrap();
/// assert_eq!(summary.created.len(), 7);
/// ```
#[tracing::instrument(skip_all, fields(root = %svn.root().display()))]
pub fn init_layout(
    layout: &Layout,
    fs: &dyn FsAdapter,
    svn: &dyn SvnAdapter,
) -> Result<InitSummary> {
    let mut summary = InitSummary::default();

    for (path, kind) in layout.init_plan() {
        assert_path_valid(path, fs, svn)?;

        if fs.exists(&svn.resolve(path)) {
            match kind {
                CreateKind::Directory => {
                    tracing::info!("Directory '{}' exists. Skipping.", path.display())
                }
                CreateKind::BranchOfTrunk => {
                    tracing::info!("Branch '{}' exists. Skipping.", branch_name(path))
                }
            }
            summary.skipped.push(path.to_path_buf());
            continue;
        }

        match kind {
            CreateKind::Directory => {
                svn.create_directory(path)?;
                commit_and_log(svn, &format!("Created directory '{}'.", path.display()))?;
            }
            CreateKind::BranchOfTrunk => {
                svn.branch(&layout.trunk, path)?;
                commit_and_log(svn, &format!("Created '{}' branch.", branch_name(path)))?;
            }
        }
        summary.created.push(path.to_path_buf());
    }

    svn.update_all()?;

    tracing::debug!(
        created = summary.created.len(),
        skipped = summary.skipped.len(),
        "layout initialized"
    );

    Ok(summary)
}

fn branch_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
