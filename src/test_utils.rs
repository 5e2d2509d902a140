//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::os::unix::fs::{PermissionsExt, symlink};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree rooted at `<tmp>/starting_path`.
///
/// The extra level keeps the root's display name stable across runs.
/// Everything is removed when dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty `starting_path` with mode `0o755`.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = fs::canonicalize(dir.path())
            .expect("Failed to resolve temp dir")
            .join("starting_path");
        fs::create_dir(&root).expect("Failed to create starting_path");
        set_mode(&root, 0o755);
        Self { _dir: dir, root }
    }

    /// Path of `starting_path`.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Create an empty file, creating parents as needed.
    pub fn add_file(&self, name: &str, mode: Option<u32>) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, "").expect("Failed to write file");
        if let Some(mode) = mode {
            set_mode(&path, mode);
        }
        path
    }

    pub fn add_dir(&self, name: &str, mode: Option<u32>) -> PathBuf {
        let path = self.root.join(name);
        fs::create_dir_all(&path).expect("Failed to create dir");
        if let Some(mode) = mode {
            set_mode(&path, mode);
        }
        path
    }

    /// Create a symbolic link at `name` pointing at `target` (taken as is).
    pub fn add_link(&self, name: &str, target: &str) -> PathBuf {
        let path = self.root.join(name);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Files, a hidden directory, a directory holding links, and a dangling link.
    ///
    /// ```text
    /// starting_path
    /// ├―― .hidden
    /// ├―― .hidden_dir/{a_file,b_file,c_file}
    /// ├―― a_dir/{a_file -> b_file, b_file, c_dir -> ../.hidden_dir}
    /// ├―― a_file, b_file, c_file
    /// └―― broken_link -> does/not/exist
    /// ```
    pub fn simple() -> Self {
        let tree = Self::new();
        tree.add_file("b_file", Some(0o664));
        tree.add_file("a_file", Some(0o664));
        tree.add_file("c_file", Some(0o664));
        tree.add_dir(".hidden_dir", Some(0o775));
        tree.add_file(".hidden_dir/b_file", Some(0o664));
        tree.add_file(".hidden_dir/a_file", Some(0o664));
        tree.add_file(".hidden_dir/c_file", Some(0o664));
        tree.add_dir("a_dir", Some(0o775));
        tree.add_file("a_dir/b_file", Some(0o664));
        tree.add_link("a_dir/a_file", "b_file");
        tree.add_link("a_dir/c_dir", "../.hidden_dir");
        tree.add_link("broken_link", "does/not/exist");
        tree.add_file(".hidden", None);
        tree
    }

    /// `chicken/egg -> ../egg` and `egg/chicken -> ../chicken`.
    pub fn chicken_and_egg() -> Self {
        let tree = Self::new();
        tree.add_dir("chicken", Some(0o775));
        tree.add_dir("egg", Some(0o775));
        tree.add_link("egg/chicken", "../chicken");
        tree.add_link("chicken/egg", "../egg");
        tree
    }

    /// A link pointing at itself.
    pub fn self_link() -> Self {
        let tree = Self::new();
        tree.add_link("points_to_self", "points_to_self");
        tree
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Set permission bits on a path.
pub fn set_mode(path: &Path, mode: u32) {
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).expect("Failed to set mode");
}
