//! Canonical repository layout.
//!
//! svnflow expects every repository to carry the same directory skeleton:
//!
//! ```text
//! trunk/
//! tags/
//! branches/
//!     develop/
//!     feature/
//!     release/
//!     hotfix/
//! ```
//!
//! All paths here are relative to the working copy root.

use crate::error::{FlowError, Result};
use std::path::{Path, PathBuf};

/// What `init` does for a canonical directory that does not exist yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateKind {
    /// `svn mkdir` an empty directory.
    Directory,

    /// `svn copy` from trunk, so the branch starts with trunk's content.
    BranchOfTrunk,
}

/// Canonical repository layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub trunk: PathBuf,
    pub tags: PathBuf,
    pub branches: PathBuf,
    pub develop: PathBuf,
    pub feature: PathBuf,
    pub release: PathBuf,
    pub hotfix: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        let branches = PathBuf::from("branches");
        Self {
            trunk: PathBuf::from("trunk"),
            tags: PathBuf::from("tags"),
            develop: branches.join("develop"),
            feature: branches.join("feature"),
            release: branches.join("release"),
            hotfix: branches.join("hotfix"),
            branches,
        }
    }
}

impl Layout {
    /// Directories in the order `init` creates them.
    ///
    /// `branches` precedes its children because creating a child requires
    /// its parent.
    pub fn init_plan(&self) -> [(&Path, CreateKind); 7] {
        [
            (self.trunk.as_path(), CreateKind::Directory),
            (self.branches.as_path(), CreateKind::Directory),
            (self.tags.as_path(), CreateKind::Directory),
            (self.develop.as_path(), CreateKind::BranchOfTrunk),
            (self.feature.as_path(), CreateKind::Directory),
            (self.release.as_path(), CreateKind::Directory),
            (self.hotfix.as_path(), CreateKind::Directory),
        ]
    }

    /// Directories covered by the health check, in report order.
    ///
    /// `develop` is intentionally absent.
    pub fn health_paths(&self) -> [&Path; 6] {
        [
            self.trunk.as_path(),
            self.tags.as_path(),
            self.branches.as_path(),
            self.feature.as_path(),
            self.release.as_path(),
            self.hotfix.as_path(),
        ]
    }

    /// Path of the feature branch called `name`.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidFeatureName` unless `name` is a single
    /// plain path component.
    pub fn feature_branch(&self, name: &str) -> Result<PathBuf> {
        validate_feature_name(name)?;
        Ok(self.feature.join(name))
    }
}

fn validate_feature_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\')
        || name.trim() != name;

    if invalid {
        return Err(FlowError::InvalidFeatureName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_paths() {
        let layout = Layout::default();

        assert_eq!(layout.develop, PathBuf::from("branches/develop"));
        assert_eq!(layout.hotfix, PathBuf::from("branches/hotfix"));
    }

    #[test]
    fn test_init_plan_order() {
        let layout = Layout::default();
        let order: Vec<_> = layout
            .init_plan()
            .iter()
            .map(|(p, _)| p.to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            order,
            [
                "trunk",
                "branches",
                "tags",
                "branches/develop",
                "branches/feature",
                "branches/release",
                "branches/hotfix"
            ]
        );
        assert_eq!(layout.init_plan()[3].1, CreateKind::BranchOfTrunk);
    }

    #[test]
    fn test_health_paths_skip_develop() {
        let layout = Layout::default();

        assert!(!layout.health_paths().contains(&layout.develop.as_path()));
        assert_eq!(layout.health_paths().len(), 6);
    }

    #[test]
    fn test_feature_branch() {
        let layout = Layout::default();

        assert_eq!(
            layout.feature_branch("login").unwrap(),
            PathBuf::from("branches/feature/login")
        );
    }

    #[test]
    fn test_feature_branch_rejects_escaping_names() {
        let layout = Layout::default();

        for name in ["", ".", "..", "a/b", "..\\x", " padded"] {
            let result = layout.feature_branch(name);
            assert!(
                matches!(result, Err(FlowError::InvalidFeatureName(_))),
                "name {name:?} should be rejected"
            );
        }
    }
}
