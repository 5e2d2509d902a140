//! Entry counts and the trailing summary line

use std::fmt;

use super::entry::EntryMetadata;

/// Summary bucket for one rendered entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Files,
    Directories,
    FileLinks,
    DirectoryLinks,
    BrokenLinks,
}

impl Category {
    /// Bucket for an entry, or `None` if nothing is on disk.
    pub fn of(meta: &EntryMetadata) -> Option<Self> {
        match (meta.is_symlink, meta.exists()) {
            (true, true) if meta.is_dir() => Some(Category::DirectoryLinks),
            (true, true) => Some(Category::FileLinks),
            (true, false) => Some(Category::BrokenLinks),
            (false, true) if meta.is_dir() => Some(Category::Directories),
            (false, true) => Some(Category::Files),
            (false, false) => None,
        }
    }

    /// Plural label
    pub fn name(&self) -> &'static str {
        match self {
            Category::Files => "files",
            Category::Directories => "directories",
            Category::FileLinks => "file links",
            Category::DirectoryLinks => "directory links",
            Category::BrokenLinks => "broken links",
        }
    }
}

/// Singular form of a plural `name` when `count` is one.
pub fn singular_or_plural(name: &str, count: usize) -> String {
    if count != 1 {
        return name.to_string();
    }
    if let Some(stem) = name.strip_suffix("ies") {
        format!("{stem}y")
    } else {
        name.strip_suffix('s').unwrap_or(name).to_string()
    }
}

/// Counts per category, kept in the order categories were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: Vec<(Category, usize)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: Category) {
        match self.counts.iter_mut().find(|(c, _)| *c == category) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((category, 1)),
        }
    }

    /// Count a rendered entry. Returns the bucket used, if any.
    pub fn record(&mut self, meta: &EntryMetadata) -> Option<Category> {
        let category = Category::of(meta)?;
        self.add(category);
        Some(category)
    }

    pub fn get(&self, category: Category) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == category)
            .map_or(0, |(_, n)| *n)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        self.counts.iter().copied()
    }
}

impl fmt::Display for Tally {
    /// `2 directories, 1 file link, 3 files`. Empty when nothing was counted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (category, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", count, singular_or_plural(category.name(), *count))?;
        }
        Ok(())
    }
}
