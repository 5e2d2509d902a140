//! TreeWalker - renders each root path as a tree, depth first

use std::ffi::OsString;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use log::{debug, warn};

use crate::error::Result;
use crate::theme::{Style, Theme};

use super::columns;
use super::config::WalkerConfig;
use super::entry::{self, EntryMetadata, classify, is_expandable};
use super::guard::CycleGuard;
use super::listing;
use super::prefix::Connectors;
use super::tally::Tally;

/// Child marker for a directory that was already entered through another path.
pub const SEEN_MARKER: &str = "...";

/// Child marker for a directory whose contents could not be read.
pub const UNREADABLE_MARKER: &str = "[error opening dir]";

/// Sink for styled text. `end` is written after `text`, unstyled.
pub trait StyledOutput {
    fn write_styled(&mut self, text: &str, style: Style, end: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What goes below a rendered entry.
enum Children {
    None,
    Entries(Vec<OsString>),
    Seen,
    Unreadable,
}

pub struct TreeWalker {
    config: WalkerConfig,
    theme: Theme,
    now: DateTime<Local>,
}

impl TreeWalker {
    /// Build a walker. "Now" for date columns is captured here, once.
    pub fn new(config: WalkerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            theme: Theme::default(),
            now: Local::now(),
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_now(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Render every root path, then the summary if enabled.
    /// Returns the counts for the whole run.
    pub fn run<O: StyledOutput>(&self, output: &mut O) -> Result<Tally> {
        let connectors = if self.config.ignore_tree {
            Connectors::none()
        } else {
            Connectors::new(self.config.indent)
        };
        let mut traversal = Traversal {
            walker: self,
            connectors,
            guard: CycleGuard::new(),
            tally: Tally::new(),
            output,
        };

        for root in self.config.roots() {
            if entry::stat(&root).is_none() {
                debug!("skipping missing path {}", root.display());
                continue;
            }
            traversal.walk(&root, "")?;
        }

        let Traversal { tally, output, .. } = traversal;
        if self.config.report {
            output.write_styled(&tally.to_string(), self.theme.summary, "\n")?;
        }
        output.flush()?;
        Ok(tally)
    }
}

/// State for one run: visited set and counts live exactly as long as this.
struct Traversal<'w, O: StyledOutput> {
    walker: &'w TreeWalker,
    connectors: Connectors,
    guard: CycleGuard,
    tally: Tally,
    output: &'w mut O,
}

impl<O: StyledOutput> Traversal<'_, O> {
    fn walk(&mut self, path: &Path, prefix: &str) -> io::Result<()> {
        let walker = self.walker;
        let (config, theme) = (&walker.config, &walker.theme);
        let meta = EntryMetadata::probe(path);
        let children = self.children(path, &meta);

        self.output.write_styled(prefix, theme.tree, "")?;
        self.write_columns(&meta)?;
        self.output
            .write_styled(&display_name(path, config.full_path), theme.entry(classify(&meta)), "\n")?;
        if !self.guard.register(path) {
            self.tally.record(&meta);
        }

        match children {
            Children::None => {}
            Children::Entries(names) => {
                let prefixes = self.connectors.child_prefixes(prefix, names.len());
                for (name, child_prefix) in names.iter().zip(prefixes) {
                    self.walk(&path.join(name), &child_prefix)?;
                }
            }
            Children::Seen => {
                let child_prefix = self.connectors.child_prefixes(prefix, 1).remove(0);
                self.write_marker(&child_prefix, SEEN_MARKER, theme.file)?;
            }
            Children::Unreadable => {
                let child_prefix = self.connectors.child_prefixes(prefix, 1).remove(0);
                self.write_marker(&child_prefix, UNREADABLE_MARKER, theme.broken_link)?;
            }
        }
        Ok(())
    }

    /// Decide what to list below `path`. Runs before `path` itself is
    /// registered, so a directory never counts as seen by its own visit.
    fn children(&self, path: &Path, meta: &EntryMetadata) -> Children {
        let config = &self.walker.config;
        if !meta.is_dir() {
            return Children::None;
        }
        if config.follow_links && self.guard.is_visited(path) {
            debug!("not descending into {} again", path.display());
            return Children::Seen;
        }
        if !is_expandable(meta, config.follow_links) {
            return Children::None;
        }
        match listing::list(path, config) {
            Ok(names) => Children::Entries(names),
            Err(e) => {
                warn!("cannot read directory {}: {}", path.display(), e);
                Children::Unreadable
            }
        }
    }

    fn write_columns(&mut self, meta: &EntryMetadata) -> io::Result<()> {
        let walker = self.walker;
        let (config, theme) = (&walker.config, &walker.theme);
        for (enabled, getter) in [
            (config.show_permissions, columns::permissions as fn(&EntryMetadata) -> String),
            (config.show_user, columns::owner),
            (config.show_group, columns::group),
        ] {
            if enabled {
                self.output.write_styled(&getter(meta), theme.permissions, " ")?;
            }
        }
        if config.shows_size() {
            let size = columns::size(meta, config.show_nice_size);
            self.output.write_styled(&size, theme.size, " ")?;
        }
        if config.show_date {
            let date = columns::date(meta, walker.now);
            self.output.write_styled(&date, theme.date, " ")?;
        }
        Ok(())
    }

    /// A marker line stands in for children; it is neither counted nor
    /// registered, and its columns show placeholders.
    fn write_marker(&mut self, prefix: &str, text: &str, style: Style) -> io::Result<()> {
        self.output.write_styled(prefix, self.walker.theme.tree, "")?;
        self.write_columns(&EntryMetadata::missing())?;
        self.output.write_styled(text, style, "\n")
    }
}

/// Name shown for `path`: the path as reached with `-f`, else its last component.
fn display_name(path: &Path, full_path: bool) -> String {
    if full_path {
        return path.display().to_string();
    }
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_to_string;
    use chrono::TimeZone;
    use std::fs;
    use std::os::unix::fs::symlink;
    use tempfile::TempDir;

    fn walker(root: &Path, config: WalkerConfig) -> TreeWalker {
        TreeWalker::new(WalkerConfig {
            paths: vec![root.to_path_buf()],
            ..config
        })
        .unwrap()
        .with_now(Local.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).single().unwrap())
    }

    fn render(root: &Path, config: WalkerConfig) -> String {
        render_to_string(&walker(root, config)).unwrap().0
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("a/b/c"), false), "c");
        assert_eq!(display_name(Path::new("a/b/c"), true), "a/b/c");
        assert_eq!(display_name(Path::new("."), false), ".");
        assert_eq!(display_name(Path::new("/"), false), "/");
    }

    #[test]
    fn test_rejects_small_indent() {
        let config = WalkerConfig {
            indent: 1,
            ..Default::default()
        };
        assert!(TreeWalker::new(config).is_err());
    }

    #[test]
    fn test_nested_prefixes() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(root.join("a/inner")).unwrap();
        fs::write(root.join("a/inner/deep"), "").unwrap();
        fs::write(root.join("a/x"), "").unwrap();
        fs::write(root.join("b"), "").unwrap();

        assert_eq!(
            render(&root, WalkerConfig::default()),
            "root\n\
             ├―― a\n\
             │   ├―― inner\n\
             │   │   └―― deep\n\
             │   └―― x\n\
             └―― b\n\
             3 directories, 3 files\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/f"), "").unwrap();
        fs::write(root.join("b"), "").unwrap();

        let config = WalkerConfig {
            indent: 2,
            report: false,
            ..Default::default()
        };
        assert_eq!(render(&root, config), "root\n├ a\n│ └ f\n└ b\n");
    }

    #[test]
    fn test_ignore_tree_is_flat() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("a/f"), "").unwrap();

        let config = WalkerConfig {
            ignore_tree: true,
            ..Default::default()
        };
        assert_eq!(render(&root, config), "root\na\nf\n2 directories, 1 file\n");
    }

    #[test]
    fn test_full_path() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("f"), "").unwrap();

        let config = WalkerConfig {
            full_path: true,
            report: false,
            ..Default::default()
        };
        let out = render(&root, config);
        assert_eq!(
            out,
            format!("{}\n└―― {}\n", root.display(), root.join("f").display())
        );
    }

    #[test]
    fn test_missing_root_prints_only_summary() {
        let dir = TempDir::new().unwrap();
        let (out, tally) = render_to_string(&walker(&dir.path().join("nope"), WalkerConfig::default())).unwrap();
        assert_eq!(out, "\n");
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_links_not_followed_by_default() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(root.join("real")).unwrap();
        fs::write(root.join("real/f"), "").unwrap();
        symlink("real", root.join("link")).unwrap();

        assert_eq!(
            render(&root, WalkerConfig::default()),
            "root\n\
             ├―― link\n\
             └―― real\n\
             \u{20}   └―― f\n\
             1 directory, 1 directory link, 1 file\n"
        );
    }

    #[test]
    fn test_follow_links_marks_repeat_visit() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(root.join("real")).unwrap();
        fs::write(root.join("real/f"), "").unwrap();
        symlink("real", root.join("link")).unwrap();

        let config = WalkerConfig {
            follow_links: true,
            ..Default::default()
        };
        assert_eq!(
            render(&root, config),
            "root\n\
             ├―― link\n\
             │   └―― f\n\
             └―― real\n\
             \u{20}   └―― ...\n\
             1 directory, 1 directory link, 1 file\n"
        );
    }

    #[test]
    fn test_seen_marker_shows_placeholder_columns() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(&root).unwrap();
        symlink("..", root.join("up")).unwrap();

        let config = WalkerConfig {
            follow_links: true,
            show_permissions: true,
            report: false,
            ..Default::default()
        };
        let out = render(&root, config);
        let last = out.lines().last().unwrap();
        assert!(last.ends_with("?????????? ..."), "{out}");
    }

    #[test]
    fn test_columns_order() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("f"), "12345").unwrap();
        let mut perms = fs::metadata(root.join("f")).unwrap().permissions();
        std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o640);
        fs::set_permissions(root.join("f"), perms).unwrap();

        let config = WalkerConfig {
            show_permissions: true,
            show_size: true,
            report: false,
            ..Default::default()
        };
        let out = render(&root, config);
        assert_eq!(out.lines().nth(1).unwrap(), "└―― -rw-r----- 5 f");
    }

    #[test]
    fn test_tally_returned() {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap().join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("f"), "").unwrap();
        symlink("gone", root.join("dangling")).unwrap();

        let (out, tally) = render_to_string(&walker(&root, WalkerConfig::default())).unwrap();
        assert_eq!(tally.total(), 3);
        assert!(out.ends_with("1 directory, 1 broken link, 1 file\n"), "{out}");
    }
}
