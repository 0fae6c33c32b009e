//! Standard file system adapter implementation.

use crate::tools::fs::FsAdapter;
use std::path::Path;

/// Standard file system adapter using `std::fs` metadata queries.
///
/// This is the implementation used in production. For testing, use
/// [`MockFsAdapter`](crate::tools::fs_mock::MockFsAdapter) instead.
#[derive(Debug, Default)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    /// Creates a new standard file system adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FsAdapter for StdFsAdapter {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_and_is_dir() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let file_path = temp_dir.path().join("trunk");

        // Nothing there yet
        assert!(!adapter.exists(&file_path));
        assert!(!adapter.is_dir(&file_path));

        // A plain file exists but is not a directory
        std::fs::write(&file_path, "content").unwrap();
        assert!(adapter.exists(&file_path));
        assert!(!adapter.is_dir(&file_path));

        assert!(adapter.is_dir(temp_dir.path()));
    }
}
