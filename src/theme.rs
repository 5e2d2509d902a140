//! Colors and text attributes for each part of a tree line

use termcolor::{Color, ColorSpec};

use crate::tree::EntryKind;

/// A semantic color plus text attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub color: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

impl Style {
    pub const PLAIN: Style = Style {
        color: None,
        bold: false,
        underline: false,
    };

    pub const fn fg(color: Color) -> Self {
        Self {
            color: Some(color),
            bold: false,
            underline: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }

    pub fn spec(&self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(self.color)
            .set_bold(self.bold)
            .set_underline(self.underline);
        spec
    }
}

/// Styles for every segment the walker writes. Constant for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub tree: Style,
    pub date: Style,
    pub directory: Style,
    pub file: Style,
    pub link: Style,
    pub broken_link: Style,
    /// Permissions, owner and group columns
    pub permissions: Style,
    pub size: Style,
    pub summary: Style,
}

impl Theme {
    pub fn entry(&self, kind: EntryKind) -> Style {
        match kind {
            EntryKind::File => self.file,
            EntryKind::Directory => self.directory,
            EntryKind::Link => self.link,
            EntryKind::BrokenLink => self.broken_link,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tree: Style::fg(Color::Yellow),
            date: Style::fg(Color::Magenta),
            directory: Style::fg(Color::Cyan).bold(),
            file: Style::fg(Color::White),
            link: Style::fg(Color::Green).underline(),
            broken_link: Style::fg(Color::Red).underline(),
            permissions: Style::fg(Color::Magenta),
            size: Style::fg(Color::White),
            summary: Style::PLAIN,
        }
    }
}
