//! termcolor-backed styled output

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::theme::Style;
use crate::tree::StyledOutput;

/// Writes styled segments to any `WriteColor` sink.
///
/// Color is decided by the sink: a `StandardStream` built with
/// `ColorChoice::Never`, or `termcolor::NoColor`, drops all escapes.
pub struct ConsoleFormatter<W: WriteColor> {
    out: W,
}

impl ConsoleFormatter<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: WriteColor> StyledOutput for ConsoleFormatter<W> {
    fn write_styled(&mut self, text: &str, style: Style, end: &str) -> io::Result<()> {
        if !text.is_empty() {
            if style.is_plain() {
                write!(self.out, "{}", text)?;
            } else {
                self.out.set_color(&style.spec())?;
                write!(self.out, "{}", text)?;
                self.out.reset()?;
            }
        }
        write!(self.out, "{}", end)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
