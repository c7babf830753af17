//! Directory fixtures for tests and benchmarks.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree built programmatically.
///
/// Paths are given relative with `/` separators; parent directories are
/// created on demand. The tree is deleted when dropped.
pub struct TempTree {
    dir: TempDir,
}

impl TempTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Path of the tree's root directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file (and its parent directories) with `contents`.
    pub fn file(&self, rel: &str, contents: &str) -> PathBuf {
        let full_path = self.dir.path().join(rel);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, contents).expect("Failed to write file");
        full_path
    }

    /// Creates a directory (and its parents).
    pub fn dir(&self, rel: &str) -> PathBuf {
        let full_path = self.dir.path().join(rel);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Builds a uniform tree: `dirs` directories per level, `files` files
    /// in each directory, `depth` levels. Handy for benchmarks.
    pub fn populate(&self, dirs: usize, files: usize, depth: usize) {
        fn fill(base: &Path, dirs: usize, files: usize, depth: usize) {
            for f in 0..files {
                fs::write(base.join(format!("file_{f}.txt")), "x")
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..dirs {
                let sub = base.join(format!("dir_{d}"));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, dirs, files, depth - 1);
            }
        }
        fill(self.dir.path(), dirs, files, depth);
    }
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}
