//! Styled output backends for the tree walker

mod console;

pub use console::ConsoleFormatter;

use termcolor::NoColor;

use crate::error::Result;
use crate::tree::{Tally, TreeWalker};

/// Run a walker into a plain-text string, without any color escapes.
pub fn render_to_string(walker: &TreeWalker) -> Result<(String, Tally)> {
    let mut formatter = ConsoleFormatter::new(NoColor::new(Vec::<u8>::new()));
    let tally = walker.run(&mut formatter)?;
    let bytes = formatter.into_inner().into_inner();
    Ok((String::from_utf8_lossy(&bytes).into_owned(), tally))
}
