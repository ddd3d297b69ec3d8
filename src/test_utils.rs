//! Test utilities for building throwaway project folders.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::tree::get_name;

/// A temporary project directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Name printed on the first line of a rendered tree.
    pub fn root_name(&self) -> String {
        get_name(self.dir.path())
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an (empty) directory, creating parents as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a folder of `dirs` x `files_per_dir` files, nested two levels deep.
    pub fn populated(dirs: usize, files_per_dir: usize) -> Self {
        let repo = Self::new();
        for d in 0..dirs {
            for f in 0..files_per_dir {
                repo.add_file(&format!("dir{d}/file{f}.txt"), "x");
                repo.add_file(&format!("dir{d}/nested/file{f}.txt"), "x");
            }
        }
        repo
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
