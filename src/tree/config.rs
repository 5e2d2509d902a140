//! Configuration types for the tree walker

use std::path::PathBuf;

use crate::error::ConfigError;

/// Smallest indent that still leaves room for a connector glyph and its space.
pub const MIN_INDENT: usize = 2;

pub const DEFAULT_INDENT: usize = 4;

/// Everything the walker needs to know, resolved once before a run.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Roots to list, in order. Empty means the current directory.
    pub paths: Vec<PathBuf>,
    pub list_hidden: bool,
    pub list_only_dirs: bool,
    /// Print each entry's path as reached instead of its base name
    pub full_path: bool,
    pub show_group: bool,
    pub show_user: bool,
    pub show_permissions: bool,
    pub show_size: bool,
    /// Human-readable sizes (wins over `show_size`)
    pub show_nice_size: bool,
    pub show_date: bool,
    /// Flat listing without connectors or indentation
    pub ignore_tree: bool,
    /// Descend into symbolic links to directories
    pub follow_links: bool,
    pub no_color: bool,
    /// Overrides `no_color`
    pub force_color: bool,
    pub reverse: bool,
    pub sort_by_time: bool,
    pub indent: usize,
    /// Print the trailing summary line
    pub report: bool,
}

impl WalkerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent < MIN_INDENT {
            return Err(ConfigError::IndentTooSmall {
                min: MIN_INDENT,
                got: self.indent,
            });
        }
        Ok(())
    }

    /// Roots to walk, falling back to `.` when none were given.
    pub fn roots(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    /// Whether a size column is printed at all.
    pub fn shows_size(&self) -> bool {
        self.show_size || self.show_nice_size
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            list_hidden: false,
            list_only_dirs: false,
            full_path: false,
            show_group: false,
            show_user: false,
            show_permissions: false,
            show_size: false,
            show_nice_size: false,
            show_date: false,
            ignore_tree: false,
            follow_links: false,
            no_color: false,
            force_color: false,
            reverse: false,
            sort_by_time: false,
            indent: DEFAULT_INDENT,
            report: true,
        }
    }
}
