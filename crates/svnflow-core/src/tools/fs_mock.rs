//! Mock file system adapter for testing.
//!
//! This module provides an in-memory implementation of the `FsAdapter`
//! trait. The mock svn adapter shares one of these so that `svn mkdir` and
//! `svn copy` show up as directories the engine can see.

use crate::tools::fs::FsAdapter;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock file system adapter for testing.
///
/// Clones share the same underlying tree.
///
/// # Examples
///
/// ```
/// use svnflow_core::tools::fs_mock::MockFsAdapter;
/// use svnflow_core::tools::fs::FsAdapter;
/// use std::path::Path;
///
/// let fs = MockFsAdapter::new();
/// fs.create_dir_all(Path::new("/wc/trunk"));
/// assert!(fs.is_dir(Path::new("/wc")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFsAdapter {
    /// Directory paths
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
    /// Regular file paths
    files: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFsAdapter {
    /// Creates an empty mock file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory and all of its missing parents.
    pub fn create_dir_all(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() || ancestor == Path::new("/") {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Creates a regular file, creating its parent directories.
    pub fn create_file(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent);
        }
        self.files.lock().unwrap().insert(path.to_path_buf());
    }

    /// Returns all directory paths, sorted.
    pub fn get_all_dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().iter().cloned().collect()
    }
}

impl FsAdapter for MockFsAdapter {
    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.files.lock().unwrap().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_create_dir_all_adds_parents() {
        let fs = MockFsAdapter::new();
        fs.create_dir_all(Path::new("/wc/branches/feature"));

        assert!(fs.is_dir(Path::new("/wc")));
        assert!(fs.is_dir(Path::new("/wc/branches")));
        assert!(fs.is_dir(Path::new("/wc/branches/feature")));
        assert!(!fs.exists(Path::new("/wc/trunk")));
    }

    #[test]
    fn test_mock_fs_file_is_not_dir() {
        let fs = MockFsAdapter::new();
        fs.create_file(Path::new("/wc/trunk"));

        assert!(fs.exists(Path::new("/wc/trunk")));
        assert!(!fs.is_dir(Path::new("/wc/trunk")));
        assert!(fs.is_dir(Path::new("/wc")));
    }

    #[test]
    fn test_mock_fs_clones_share_state() {
        let fs = MockFsAdapter::new();
        let other = fs.clone();
        other.create_dir_all(Path::new("/wc/tags"));

        assert!(fs.is_dir(Path::new("/wc/tags")));
        assert_eq!(
            fs.get_all_dirs(),
            vec![PathBuf::from("/wc"), PathBuf::from("/wc/tags")]
        );
    }
}
