//! Statement completion core
//!
//! Classifies the cursor's line and produces one of three edit plans: skip
//! over a lone closing brace, open a new indented block, or terminate a
//! statement and start an equally-indented new line. Pure and infallible:
//! every invocation is independent and receives the full context it needs as
//! input.

use crate::action::{CursorMove, EditAction, Position};
use crate::classify::{classify, LineKind};
use crate::indent::{IndentContext, DEFAULT_TAB_STOP};

/// The line containing the cursor, as supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Zero-based line number
    pub number: usize,
    /// Full raw text of the line, without its terminator
    pub text: &'a str,
}

impl<'a> Line<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// End-of-line position (column counts characters)
    pub fn end(&self) -> Position {
        Position::new(self.number, self.text.chars().count())
    }
}

/// Completion behavior knobs, sourced from host configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompleteOptions {
    /// Indentation width, "treat an indent as this many spaces"
    pub tab_stop: usize,
    /// Place the opening brace on its own line (Allman style) instead of at
    /// the end of the statement line (default)
    pub allman: bool,
}

impl Default for CompleteOptions {
    fn default() -> Self {
        Self { tab_stop: DEFAULT_TAB_STOP, allman: false }
    }
}

/// Produce the edit plan for one completion keystroke.
///
/// `cursor` is the active cursor if the host has one; it is only used to ask
/// whether the cursor sits exactly at end-of-line before the edit. A missing
/// cursor conservatively reads as "not at end", which selects the
/// down-then-line-end repositioning path.
///
/// The host's cursor convention drives the move asymmetry: inserting
/// multi-line text at the position the cursor occupies auto-advances the
/// cursor past the inserted text, while inserting elsewhere leaves the cursor
/// on the original line.
pub fn complete_statement(
    line: &Line<'_>,
    cursor: Option<Position>,
    opts: &CompleteOptions,
) -> EditAction {
    let trimmed = line.text.trim();
    let indent = IndentContext::of(line.text, opts.tab_stop);
    let end = line.end();
    let is_at_end = cursor.map_or(false, |active| active.column == end.column);

    let mut action = EditAction::none();
    let kind = classify(trimmed);

    if kind == LineKind::ClosingBrace {
        // Step out of the block: land after the statement preceding the
        // brace, not on the brace itself.
        action.move_cursor(CursorMove::Up);
        action.move_cursor(CursorMove::WrappedLineEnd);
    } else if kind.opens_block() {
        if line.text.ends_with('{') {
            // The user already supplied the brace; just advance into the body.
            action.move_cursor(CursorMove::Down);
            action.move_cursor(CursorMove::WrappedLineEnd);
        } else {
            let braces = if opts.allman {
                format!(
                    "\n{less}{{\n{body}\n{less}}}",
                    less = indent.less_indent_spaces,
                    body = indent.indent_spaces
                )
            } else {
                let block = format!(
                    "{{\n{body}\n{less}}}",
                    body = indent.indent_spaces,
                    less = indent.less_indent_spaces
                );
                if line.text.ends_with(' ') {
                    // avoid duplicated spaces
                    block
                } else {
                    format!(" {block}")
                }
            };
            action.insert(end, braces);

            // Move the cursor onto the empty body line. When the edit
            // originated at end-of-line the host parks the cursor after all
            // inserted text (on the closing brace), so go up; otherwise the
            // cursor stayed on the statement line, so go down.
            if is_at_end {
                action.move_cursor(CursorMove::Up);
            } else {
                action.move_cursor(CursorMove::Down);
            }
            action.move_cursor(CursorMove::WrappedLineEnd);
        }
    } else {
        if !trimmed.is_empty() && !line.text.ends_with(';') {
            action.insert(end, ";");
        }
        action.insert(end, format!("\n{}", indent.less_indent_spaces));

        // At end-of-line the host's auto-advance already lands the cursor on
        // the new line; an extra move would overshoot by one.
        if !is_at_end {
            action.move_cursor(CursorMove::Down);
            action.move_cursor(CursorMove::WrappedLineEnd);
        }
    }

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Insertion;

    fn at(line: &Line<'_>, column: usize) -> Option<Position> {
        Some(Position::new(line.number, column))
    }

    fn end_of(line: &Line<'_>) -> Option<Position> {
        Some(line.end())
    }

    #[test]
    fn test_closing_brace_moves_only() {
        let line = Line::new(3, "    }");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert!(!action.has_edits());
        assert_eq!(
            action.cursor_moves,
            vec![CursorMove::Up, CursorMove::WrappedLineEnd]
        );
    }

    #[test]
    fn test_opener_with_existing_brace_moves_only() {
        let line = Line::new(0, "if (x > 0) {");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert!(!action.has_edits());
        assert_eq!(
            action.cursor_moves,
            vec![CursorMove::Down, CursorMove::WrappedLineEnd]
        );
    }

    #[test]
    fn test_if_at_end_of_line_default_style() {
        let line = Line::new(0, "if (x > 0)");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert_eq!(
            action.insertions,
            vec![Insertion::new(Position::new(0, 10), " {\n    \n}")]
        );
        assert_eq!(
            action.cursor_moves,
            vec![CursorMove::Up, CursorMove::WrappedLineEnd]
        );
    }

    #[test]
    fn test_opener_cursor_mid_line_moves_down() {
        let line = Line::new(0, "if (x > 0)");
        let action = complete_statement(&line, at(&line, 3), &CompleteOptions::default());

        assert_eq!(
            action.cursor_moves,
            vec![CursorMove::Down, CursorMove::WrappedLineEnd]
        );
    }

    #[test]
    fn test_opener_trailing_space_no_double_space() {
        let line = Line::new(0, "while (run) ");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert_eq!(action.insertions[0].text, "{\n    \n}");
    }

    #[test]
    fn test_indented_opener() {
        let line = Line::new(5, "    for (i = 0; i < n; i++)");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert_eq!(action.insertions[0].text, " {\n        \n    }");
    }

    #[test]
    fn test_allman_style() {
        let line = Line::new(0, "if (x > 0)");
        let opts = CompleteOptions { allman: true, ..Default::default() };
        let action = complete_statement(&line, end_of(&line), &opts);

        assert_eq!(action.insertions[0].text, "\n{\n    \n}");
    }

    #[test]
    fn test_allman_style_indented() {
        let line = Line::new(2, "    if (x > 0)");
        let opts = CompleteOptions { allman: true, ..Default::default() };
        let action = complete_statement(&line, end_of(&line), &opts);

        // Opening brace on its own line at the statement's indentation,
        // not one level deeper.
        assert_eq!(action.insertions[0].text, "\n    {\n        \n    }");
    }

    #[test]
    fn test_keywordless_declaration_gets_braces() {
        let line = Line::new(0, "int main()");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert_eq!(action.insertions[0].text, " {\n    \n}");
    }

    #[test]
    fn test_statement_gets_semicolon_and_newline() {
        let line = Line::new(0, "x = 5");
        let action = complete_statement(&line, at(&line, 2), &CompleteOptions::default());

        assert_eq!(
            action.insertions,
            vec![
                Insertion::new(Position::new(0, 5), ";"),
                Insertion::new(Position::new(0, 5), "\n"),
            ]
        );
        assert_eq!(
            action.cursor_moves,
            vec![CursorMove::Down, CursorMove::WrappedLineEnd]
        );
    }

    #[test]
    fn test_statement_at_end_skips_moves() {
        let line = Line::new(0, "x = 5");
        let action = complete_statement(&line, end_of(&line), &CompleteOptions::default());

        assert!(action.has_edits());
        assert!(action.cursor_moves.is_empty());
    }

    #[test]
    fn test_terminated_statement_gets_no_second_semicolon() {
        let line = Line::new(0, "x = 5;");
        let action = complete_statement(&line, at(&line, 2), &CompleteOptions::default());

        assert_eq!(
            action.insertions,
            vec![Insertion::new(Position::new(0, 6), "\n")]
        );
    }

    #[test]
    fn test_indented_statement_keeps_indentation() {
        let line = Line::new(4, "        total += x");
        let action = complete_statement(&line, at(&line, 10), &CompleteOptions::default());

        assert_eq!(action.insertions[0].text, ";");
        assert_eq!(action.insertions[1].text, "\n        ");
    }

    #[test]
    fn test_empty_line_gets_newline_only() {
        let line = Line::new(0, "");
        let action = complete_statement(&line, at(&line, 0), &CompleteOptions::default());

        // Empty trimmed text: no semicolon, just the new line.
        assert_eq!(
            action.insertions,
            vec![Insertion::new(Position::new(0, 0), "\n")]
        );
    }

    #[test]
    fn test_missing_cursor_reads_as_not_at_end() {
        let line = Line::new(0, "x = 5");
        let action = complete_statement(&line, None, &CompleteOptions::default());

        // Conservative default: the "not at end" repositioning path.
        assert_eq!(
            action.cursor_moves,
            vec![CursorMove::Down, CursorMove::WrappedLineEnd]
        );
    }

    #[test]
    fn test_tab_stop_two() {
        let line = Line::new(1, "  if (ok)");
        let opts = CompleteOptions { tab_stop: 2, ..Default::default() };
        let action = complete_statement(&line, end_of(&line), &opts);

        assert_eq!(action.insertions[0].text, " {\n    \n  }");
    }
}
