//! Cycle detection for followed symbolic links

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Canonical paths rendered so far in one run.
///
/// Shared by every root path of a run, so a link in one root pointing into
/// another root is caught as well.
#[derive(Debug, Default)]
pub struct CycleGuard {
    visited: HashSet<PathBuf>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rendered entry. Returns true if the entry itself, at its
    /// absolute (not link-resolved) location, was already recorded, e.g. as
    /// the target of a link rendered earlier; nothing is added then.
    ///
    /// Otherwise its canonical path is recorded. Paths that do not
    /// canonicalize (dangling links) are never recorded.
    pub fn register(&mut self, path: &Path) -> bool {
        let seen = std::path::absolute(path).is_ok_and(|abs| self.visited.contains(&abs));
        if !seen {
            if let Ok(real) = std::fs::canonicalize(path) {
                self.visited.insert(real);
            }
        }
        seen
    }

    pub fn is_visited(&self, path: &Path) -> bool {
        std::fs::canonicalize(path).is_ok_and(|real| self.visited.contains(&real))
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
