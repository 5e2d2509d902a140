//! Per-path metadata snapshots and entry classification

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;
use std::time::SystemTime;

/// What `stat` saw on the far side of any symbolic link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatSnapshot {
    /// Raw `st_mode`: file type and permission bits
    pub mode: u32,
    pub size: u64,
    pub mtime: Option<SystemTime>,
    pub uid: u32,
    pub gid: u32,
    pub is_dir: bool,
}

impl StatSnapshot {
    fn from_metadata(meta: &fs::Metadata) -> Self {
        Self {
            mode: meta.mode(),
            size: meta.len(),
            mtime: meta.modified().ok(),
            uid: meta.uid(),
            gid: meta.gid(),
            is_dir: meta.is_dir(),
        }
    }
}

/// Metadata for one visited path.
///
/// `is_symlink` comes from `lstat`, everything else from a link-following
/// `stat`. A dangling link has no snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    pub is_symlink: bool,
    pub stat: Option<StatSnapshot>,
}

impl EntryMetadata {
    /// Probe a path. Never fails; missing pieces are simply absent.
    pub fn probe(path: &Path) -> Self {
        let is_symlink = fs::symlink_metadata(path)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        let stat = fs::metadata(path).ok().map(|m| StatSnapshot::from_metadata(&m));
        Self { is_symlink, stat }
    }

    /// Metadata for something that is not on disk at all.
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn exists(&self) -> bool {
        self.stat.is_some()
    }

    pub fn is_dir(&self) -> bool {
        self.stat.is_some_and(|s| s.is_dir)
    }

    pub fn is_broken_link(&self) -> bool {
        self.is_symlink && !self.exists()
    }

    /// Apply `f` to the stat snapshot, or return `default` if there is none.
    ///
    /// Every column getter goes through here so each one degrades on its own.
    pub fn resolve<T>(&self, f: impl FnOnce(&StatSnapshot) -> T, default: T) -> T {
        match &self.stat {
            Some(stat) => f(stat),
            None => default,
        }
    }
}

/// Stat a path, or `None` if there is nothing there (not even a dangling link).
pub fn stat(path: &Path) -> Option<EntryMetadata> {
    let meta = EntryMetadata::probe(path);
    if meta.exists() || meta.is_symlink {
        Some(meta)
    } else {
        None
    }
}

/// Display category of an entry, which picks its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Link,
    BrokenLink,
}

pub fn classify(meta: &EntryMetadata) -> EntryKind {
    if meta.is_symlink {
        if meta.exists() {
            EntryKind::Link
        } else {
            EntryKind::BrokenLink
        }
    } else if meta.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

/// Whether a directory's children should be listed at all, before any cycle
/// check. Links are only entered when following links.
pub fn is_expandable(meta: &EntryMetadata, follow_links: bool) -> bool {
    meta.is_dir() && (!meta.is_symlink || follow_links)
}
