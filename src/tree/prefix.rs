//! Box-drawing prefixes for each nesting level

const TEE: char = '├';
const CORNER: char = '└';
const HBAR: char = '―';
const VBAR: char = '│';

/// Connector glyphs for a given indent width.
///
/// A child line is `inherited prefix + connector`. The connector is `tee` for
/// every sibling but the last, which gets `corner`. Both are followed by a
/// space, so each level is exactly `indent` columns wide.
#[derive(Debug, Clone)]
pub struct Connectors {
    tee: String,
    corner: String,
    /// `│` plus padding, replacing a `tee` in inherited prefixes
    vbar_run: String,
    /// Blanks replacing a `corner` in inherited prefixes
    blank_run: String,
    disabled: bool,
}

impl Connectors {
    pub fn new(indent: usize) -> Self {
        let hbar: String = std::iter::repeat_n(HBAR, indent.saturating_sub(2)).collect();
        let tee = format!("{TEE}{hbar}");
        let corner = format!("{CORNER}{hbar}");
        let pad = " ".repeat(hbar.chars().count());
        Self {
            vbar_run: format!("{VBAR}{pad}"),
            blank_run: " ".repeat(corner.chars().count()),
            tee,
            corner,
            disabled: false,
        }
    }

    /// Connectors that draw nothing, for flat `-i` listings.
    pub fn none() -> Self {
        Self {
            tee: String::new(),
            corner: String::new(),
            vbar_run: String::new(),
            blank_run: String::new(),
            disabled: true,
        }
    }

    pub fn connector(&self, is_last: bool) -> String {
        if self.disabled {
            return String::new();
        }
        let glyph = if is_last { &self.corner } else { &self.tee };
        format!("{glyph} ")
    }

    /// Rewrite a node's own prefix into the prefix its children inherit:
    /// finished branches become blank, open branches a vertical bar.
    pub fn inherit(&self, prefix: &str) -> String {
        if self.disabled {
            return String::new();
        }
        prefix
            .replace(&self.corner, &self.blank_run)
            .replace(&self.tee, &self.vbar_run)
    }

    /// Full prefixes for `count` children of a node whose prefix is `prefix`.
    pub fn child_prefixes(&self, prefix: &str, count: usize) -> Vec<String> {
        let inherited = self.inherit(prefix);
        (0..count)
            .map(|i| format!("{}{}", inherited, self.connector(i + 1 == count)))
            .collect()
    }
}
