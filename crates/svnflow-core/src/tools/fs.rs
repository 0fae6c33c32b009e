//! File system adapter trait.
//!
//! The workflow engine only needs to ask whether a path is present on disk
//! and whether it is a directory. Keeping those two queries behind a trait
//! lets the engine run against an in-memory tree in tests.

use std::path::Path;

/// File system adapter trait.
///
/// Implementations can be real (using `std::fs`) or mocked for testing.
/// Paths passed here are absolute.
pub trait FsAdapter: Send + Sync {
    /// Checks if a path exists.
    ///
    /// # Returns
    ///
    /// `true` if the path exists (file or directory), `false` otherwise.
    fn exists(&self, path: &Path) -> bool;

    /// Checks if a path is a directory.
    ///
    /// # Returns
    ///
    /// `true` if the path exists and is a directory, `false` otherwise.
    fn is_dir(&self, path: &Path) -> bool;
}
