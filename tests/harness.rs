//! Test harness for arbor integration tests

use std::path::Path;
use std::process::Command;

pub use arbor::test_utils::{TestTree, set_mode};

/// Run the arbor binary in `dir`, returning (stdout, stderr, success).
pub fn run_arbor(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_arbor");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run arbor");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Run arbor on `tree`'s root from its parent directory, so the root prints
/// as `starting_path`.
#[allow(dead_code)]
pub fn run_on(tree: &TestTree, flags: &[&str]) -> String {
    let parent = tree.path().parent().expect("starting_path has a parent");
    let mut args = flags.to_vec();
    args.push("starting_path");
    let (stdout, stderr, success) = run_arbor(parent, &args);
    assert!(success, "arbor failed: {}", stderr);
    stdout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_starting_path() {
        let tree = TestTree::new();
        assert!(tree.path().is_dir());
        assert!(tree.path().ends_with("starting_path"));
    }

    #[test]
    fn test_harness_simple_tree() {
        let tree = TestTree::simple();
        assert!(tree.path().join("a_dir/c_dir").is_symlink());
        assert!(!tree.path().join("broken_link").exists());
    }
}
