//! Arbor - pretty listing of directory structures

pub mod error;
pub mod output;
pub mod theme;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ConfigError, Error, Result};
pub use output::{ConsoleFormatter, render_to_string};
pub use theme::{Style, Theme};
pub use tree::{Category, StyledOutput, Tally, TreeWalker, WalkerConfig};
