//! Mock svn adapter for testing.
//!
//! This module provides a mock implementation of the `SvnAdapter` trait
//! for use in tests. The mock keeps the set of tracked paths in memory,
//! mirrors directory creation onto a shared [`MockFsAdapter`], and records
//! every call so tests can assert on the exact sequence.

use crate::error::{FlowError, Result};
use crate::tools::fs::FsAdapter;
use crate::tools::fs_mock::MockFsAdapter;
use crate::tools::svn::SvnAdapter;
use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// One recorded svn invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvnCall {
    Mkdir(PathBuf),
    Commit(String),
    Copy { source: PathBuf, target: PathBuf },
    Merge {
        source: PathBuf,
        dest: PathBuf,
        reintegrate: bool,
    },
    Update,
    List(PathBuf),
    Info(PathBuf),
}

impl SvnCall {
    /// svn subcommand name of this call.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mkdir(_) => "mkdir",
            Self::Commit(_) => "commit",
            Self::Copy { .. } => "copy",
            Self::Merge { .. } => "merge",
            Self::Update => "update",
            Self::List(_) => "list",
            Self::Info(_) => "info",
        }
    }

    /// Whether the call changes the repository or the working copy.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Info(_))
    }
}

/// Mock svn adapter for testing.
///
/// Clones share the same state.
///
/// # Examples
///
/// ```
/// use svnflow_core::tools::fs_mock::MockFsAdapter;
/// use svnflow_core::tools::svn::SvnAdapter;
/// use svnflow_core::tools::svn_mock::MockSvnAdapter;
/// use std::path::Path;
///
/// let svn = MockSvnAdapter::new("/wc", MockFsAdapter::new());
/// svn.create_directory(Path::new("trunk")).unwrap();
/// assert!(svn.is_tracked(Path::new("trunk")));
/// ```
#[derive(Debug, Clone)]
pub struct MockSvnAdapter {
    root: PathBuf,
    /// Shared working copy tree
    fs: MockFsAdapter,
    /// Root-relative paths svn knows about
    tracked: Arc<Mutex<BTreeSet<PathBuf>>>,
    /// Every call, in order
    history: Arc<Mutex<Vec<SvnCall>>>,
    /// Subcommands that should fail
    failing: Arc<Mutex<HashSet<String>>>,
}

impl MockSvnAdapter {
    /// Creates a mock working copy at `root` backed by `fs`.
    ///
    /// The root directory itself is created and tracked.
    pub fn new(root: impl Into<PathBuf>, fs: MockFsAdapter) -> Self {
        let root = root.into();
        fs.create_dir_all(&root);

        let mut tracked = BTreeSet::new();
        tracked.insert(PathBuf::new());

        Self {
            root,
            fs,
            tracked: Arc::new(Mutex::new(tracked)),
            history: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Marks `path` as tracked without recording a call or touching the tree.
    pub fn track(&self, path: impl Into<PathBuf>) {
        self.tracked.lock().unwrap().insert(path.into());
    }

    /// Makes every later call of the given subcommand (e.g. `"commit"`) fail.
    pub fn fail_on(&self, subcommand: &str) {
        self.failing.lock().unwrap().insert(subcommand.to_string());
    }

    /// Returns every recorded call.
    pub fn get_history(&self) -> Vec<SvnCall> {
        self.history.lock().unwrap().clone()
    }

    /// Returns recorded calls that mutate state, skipping `list` and `info`.
    pub fn mutations(&self) -> Vec<SvnCall> {
        self.get_history()
            .into_iter()
            .filter(SvnCall::is_mutation)
            .collect()
    }

    /// Returns the number of recorded calls of the given subcommand.
    pub fn command_count(&self, subcommand: &str) -> usize {
        self.history
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.name() == subcommand)
            .count()
    }

    /// Returns all tracked root-relative paths, sorted.
    pub fn tracked_paths(&self) -> Vec<PathBuf> {
        self.tracked.lock().unwrap().iter().cloned().collect()
    }

    /// Clears recorded calls.
    pub fn clear_history(&self) {
        self.history.lock().unwrap().clear();
    }

    fn record(&self, call: SvnCall) -> Result<()> {
        let name = call.name();
        self.history.lock().unwrap().push(call);

        if self.failing.lock().unwrap().contains(name) {
            return Err(FlowError::SvnCommandFailed(format!(
                "svn {} failed (mock)",
                name
            )));
        }
        Ok(())
    }
}

impl SvnAdapter for MockSvnAdapter {
    fn root(&self) -> &Path {
        &self.root
    }

    fn create_directory(&self, path: &Path) -> Result<()> {
        self.record(SvnCall::Mkdir(path.to_path_buf()))?;

        self.fs.create_dir_all(&self.resolve(path));
        self.track(path);
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(SvnCall::Commit(message.to_string()))
    }

    fn branch(&self, source: &Path, target: &Path) -> Result<()> {
        self.record(SvnCall::Copy {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
        })?;

        let mut tracked = self.tracked.lock().unwrap();
        let subtree: Vec<PathBuf> = tracked
            .iter()
            .filter_map(|p| p.strip_prefix(source).ok())
            .map(Path::to_path_buf)
            .collect();

        if subtree.is_empty() {
            return Err(FlowError::SvnCommandFailed(format!(
                "svn copy: '{}' is not under version control",
                source.display()
            )));
        }

        for rest in subtree {
            let (from, to) = if rest.as_os_str().is_empty() {
                (source.to_path_buf(), target.to_path_buf())
            } else {
                (source.join(&rest), target.join(&rest))
            };

            if self.fs.is_dir(&self.resolve(&from)) {
                self.fs.create_dir_all(&self.resolve(&to));
            } else {
                self.fs.create_file(&self.resolve(&to));
            }
            tracked.insert(to);
        }
        Ok(())
    }

    fn merge(&self, source: &Path, dest: &Path, reintegrate: bool) -> Result<()> {
        self.record(SvnCall::Merge {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            reintegrate,
        })
    }

    fn update_all(&self) -> Result<()> {
        self.record(SvnCall::Update)
    }

    fn list_entries(&self, path: &Path) -> Result<Vec<String>> {
        self.record(SvnCall::List(path.to_path_buf()))?;

        let tracked = self.tracked.lock().unwrap();
        if !tracked.contains(path) {
            return Err(FlowError::SvnCommandFailed(format!(
                "svn list: '{}' is not under version control",
                path.display()
            )));
        }

        Ok(tracked
            .iter()
            .filter(|p| p.parent() == Some(path) && p.as_path() != path)
            .filter_map(|p| {
                let name = p.file_name()?.to_string_lossy().into_owned();
                if self.fs.is_dir(&self.resolve(p)) {
                    Some(format!("{}/", name))
                } else {
                    Some(name)
                }
            })
            .collect())
    }

    fn is_tracked(&self, path: &Path) -> bool {
        // Query failures count as untracked
        if self.record(SvnCall::Info(path.to_path_buf())).is_err() {
            return false;
        }
        self.tracked.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock() -> (MockFsAdapter, MockSvnAdapter) {
        let fs = MockFsAdapter::new();
        let svn = MockSvnAdapter::new("/wc", fs.clone());
        (fs, svn)
    }

    #[test]
    fn test_mock_svn_mkdir_tracks_and_creates() {
        let (fs, svn) = mock();

        svn.create_directory(Path::new("trunk")).unwrap();

        assert!(svn.is_tracked(Path::new("trunk")));
        assert!(fs.is_dir(Path::new("/wc/trunk")));
        assert_eq!(svn.mutations(), vec![SvnCall::Mkdir(PathBuf::from("trunk"))]);
    }

    #[test]
    fn test_mock_svn_copy_copies_subtree() {
        let (fs, svn) = mock();
        svn.create_directory(Path::new("trunk")).unwrap();
        svn.create_directory(Path::new("trunk/src")).unwrap();
        svn.create_directory(Path::new("branches")).unwrap();

        svn.branch(Path::new("trunk"), Path::new("branches/develop"))
            .unwrap();

        assert!(svn.is_tracked(Path::new("branches/develop")));
        assert!(svn.is_tracked(Path::new("branches/develop/src")));
        assert!(fs.is_dir(Path::new("/wc/branches/develop/src")));
    }

    #[test]
    fn test_mock_svn_copy_untracked_source_fails() {
        let (_fs, svn) = mock();

        let result = svn.branch(Path::new("trunk"), Path::new("branches/develop"));
        assert!(matches!(result, Err(FlowError::SvnCommandFailed(_))));
    }

    #[test]
    fn test_mock_svn_list_entries() {
        let (fs, svn) = mock();
        svn.create_directory(Path::new("branches")).unwrap();
        svn.create_directory(Path::new("branches/feature")).unwrap();
        svn.create_directory(Path::new("branches/feature/login")).unwrap();
        fs.create_file(Path::new("/wc/branches/feature/NOTES"));
        svn.track("branches/feature/NOTES");

        let entries = svn.list_entries(Path::new("branches/feature")).unwrap();
        assert_eq!(entries, vec!["NOTES", "login/"]);

        let root = svn.list_entries(Path::new("")).unwrap();
        assert_eq!(root, vec!["branches/"]);
    }

    #[test]
    fn test_mock_svn_fail_on() {
        let (_fs, svn) = mock();
        svn.fail_on("commit");

        assert!(svn.update_all().is_ok());
        assert!(matches!(
            svn.commit("message"),
            Err(FlowError::SvnCommandFailed(_))
        ));
        assert_eq!(svn.command_count("commit"), 1);
    }

    #[test]
    fn test_mock_svn_failing_info_means_untracked() {
        let (_fs, svn) = mock();
        svn.create_directory(Path::new("trunk")).unwrap();
        svn.fail_on("info");

        assert!(!svn.is_tracked(Path::new("trunk")));
    }
}
