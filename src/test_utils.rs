//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::os::unix::fs::symlink;
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_symlink_file_times};
use tempfile::TempDir;

/// A temporary directory for testing.
///
/// Provides methods for creating files, directories and symlinks and for
/// pinning modification times. The directory is removed when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create a symlink at `link` pointing at `target`. The target is stored
    /// as given, so relative targets resolve against the link's directory.
    pub fn add_symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.dir.path().join(link);
        symlink(target, &link_path).expect("Failed to create symlink");
        link_path
    }

    /// Set the modification (and access) time of `path` to `unix_secs`.
    /// Symlinks themselves are touched, not their targets.
    pub fn set_mtime(&self, path: &str, unix_secs: i64) {
        let time = FileTime::from_unix_time(unix_secs, 0);
        set_symlink_file_times(self.dir.path().join(path), time, time)
            .expect("Failed to set file times");
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
