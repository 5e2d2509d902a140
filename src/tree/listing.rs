//! Listing, filtering and ordering a directory's immediate children

use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;

use super::columns::mtime_key;
use super::config::WalkerConfig;
use super::entry::EntryMetadata;

/// Whether a child named `name` inside `parent` should be shown.
pub fn to_print(parent: &Path, name: &OsStr, config: &WalkerConfig) -> bool {
    if !config.list_hidden && name.as_encoded_bytes().starts_with(b".") {
        return false;
    }
    if config.list_only_dirs && !parent.join(name).is_dir() {
        return false;
    }
    true
}

/// List the children of `path` that pass [`to_print`], in display order.
pub fn list(path: &Path, config: &WalkerConfig) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let name = entry?.file_name();
        if to_print(path, &name, config) {
            names.push(name);
        }
    }
    sort_names(path, &mut names, config);
    Ok(names)
}

/// Sort by case-insensitive name, or by modification time with `-t`.
/// Both sorts are stable; `-r` reverses the finished order.
pub fn sort_names(parent: &Path, names: &mut [OsString], config: &WalkerConfig) {
    if config.sort_by_time {
        let mut keyed: Vec<(f64, OsString)> = names
            .iter()
            .map(|name| (mtime_key(&EntryMetadata::probe(&parent.join(name))), name.clone()))
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (slot, (_, name)) in names.iter_mut().zip(keyed) {
            *slot = name;
        }
    } else {
        names.sort_by_cached_key(|name| name.to_string_lossy().to_lowercase());
    }
    if config.reverse {
        names.reverse();
    }
}
