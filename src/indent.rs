//! Indentation derivation from a line's leading whitespace
//!
//! Space-only indentation in multiples of the configured tab stop is assumed.
//! Tab-indented or irregularly-indented lines get best-effort results from the
//! same arithmetic.

/// Default indentation width when the host supplies none
pub const DEFAULT_TAB_STOP: usize = 4;

/// Indentation strings derived from one line and a tab stop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentContext {
    /// Configured indent width
    pub tab_stop: usize,
    /// Nesting depth of the line itself
    pub indent_level: usize,
    /// One level deeper than the line: the body of a new block
    pub indent_spaces: String,
    /// The line's own level: continuation lines and closing braces
    pub less_indent_spaces: String,
}

impl IndentContext {
    /// Derive indentation context from raw (untrimmed) line text.
    ///
    /// A line starting with a space has
    /// `indent_level = rfind(tab_stop spaces) / tab_stop + 1`, the deepest
    /// whole multiple of `tab_stop` found as a run of spaces, offset by one
    /// level. Any other line is at level 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use complete_statement::indent::IndentContext;
    ///
    /// let ctx = IndentContext::of("        x = 5", 4);
    /// assert_eq!(ctx.indent_level, 2);
    /// assert_eq!(ctx.indent_spaces.len(), 12);
    /// assert_eq!(ctx.less_indent_spaces.len(), 8);
    /// ```
    pub fn of(raw_line: &str, tab_stop: usize) -> Self {
        let mut indent_level = 0;
        if raw_line.starts_with(' ') {
            let run = " ".repeat(tab_stop);
            if let Some(position) = raw_line.rfind(&run) {
                indent_level = position / tab_stop + 1;
            }
        }

        Self {
            tab_stop,
            indent_level,
            indent_spaces: " ".repeat(tab_stop * (indent_level + 1)),
            less_indent_spaces: " ".repeat(tab_stop * indent_level),
        }
    }
}
