//! Layout health check.
//!
//! Read-only structural check behind `svnflow test`. Each checked path must
//! pass validation and exist on disk. Every path is checked even after a
//! failure so one run gives the complete picture.

use crate::error::Result;
use crate::layout::Layout;
use crate::tools::fs::FsAdapter;
use crate::tools::svn::SvnAdapter;
use crate::workflows::validate::{assert_exists, assert_path_valid};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of checking one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Ok,
    Fail,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("OK"),
            Self::Fail => f.write_str("FAIL"),
        }
    }
}

/// Result of checking a single canonical path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCheck {
    /// Root-relative path that was checked.
    pub path: PathBuf,

    /// Whether it passed.
    pub status: CheckStatus,

    /// Error message for a failed check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-path report produced by [`check_layout`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// Checks in layout order.
    pub checks: Vec<PathCheck>,
}

impl HealthReport {
    /// `true` if every path passed.
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.status == CheckStatus::Ok)
    }

    /// Checks that failed, in report order.
    pub fn failures(&self) -> impl Iterator<Item = &PathCheck> {
        self.checks.iter().filter(|c| c.status == CheckStatus::Fail)
    }

    /// Aggregate process exit status: 0 when all checks pass, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.passed() { 0 } else { 1 }
    }
}

/// Checks the canonical layout without modifying anything.
///
/// Covers `trunk`, `tags`, `branches` and the `feature`, `release` and
/// `hotfix` categories. `branches/develop` is not checked.
///
/// Never fails as a whole; per-path errors land in the report.
#[tracing::instrument(skip_all, fields(root = %svn.root().display()))]
pub fn check_layout(layout: &Layout, fs: &dyn FsAdapter, svn: &dyn SvnAdapter) -> HealthReport {
    let checks = layout
        .health_paths()
        .into_iter()
        .map(|path| match check_path(path, fs, svn) {
            Ok(()) => {
                tracing::debug!("{} [OK]", path.display());
                PathCheck {
                    path: path.to_path_buf(),
                    status: CheckStatus::Ok,
                    error: None,
                }
            }
            Err(e) => {
                tracing::debug!("{} [FAIL]: {}", path.display(), e);
                PathCheck {
                    path: path.to_path_buf(),
                    status: CheckStatus::Fail,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    HealthReport { checks }
}

fn check_path(path: &Path, fs: &dyn FsAdapter, svn: &dyn SvnAdapter) -> Result<()> {
    assert_path_valid(path, fs, svn)?;
    assert_exists(path, fs, svn)
}
