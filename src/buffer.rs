//! In-memory text buffer implementing the host-editor interface
//!
//! Backs the CLI and the test suite. The buffer encodes the host cursor
//! convention the completer's move asymmetry depends on: inserting text at
//! the cursor's own position auto-advances the cursor past the inserted
//! text, while inserting anywhere else leaves the cursor in place.

use crate::action::{CursorMove, Position};
use crate::host::HostEditor;

/// A plain line-based text buffer with one cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<String>,
    cursor: Position,
}

impl Buffer {
    /// Build a buffer from text. An empty string yields one empty line.
    pub fn from_text(text: &str) -> Self {
        let lines = text.split('\n').map(str::to_string).collect();
        Self { lines, cursor: Position::new(0, 0) }
    }

    /// The buffer contents as one string with `\n` separators
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Place the cursor, clamping to the document
    pub fn set_cursor(&mut self, position: Position) {
        let line = position.line.min(self.lines.len().saturating_sub(1));
        let column = position.column.min(self.line_len(line));
        self.cursor = Position::new(line, column);
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    fn clamp_column(&mut self) {
        let max = self.line_len(self.cursor.line);
        if self.cursor.column > max {
            self.cursor.column = max;
        }
    }

    /// Byte offset of a character column within a line
    fn byte_offset(line: &str, column: usize) -> usize {
        line.char_indices()
            .nth(column)
            .map(|(offset, _)| offset)
            .unwrap_or(line.len())
    }
}

impl HostEditor for Buffer {
    fn selection_start(&self) -> Position {
        self.cursor
    }

    fn active_cursor(&self) -> Option<Position> {
        Some(self.cursor)
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.lines.get(line).cloned()
    }

    fn insert(&mut self, at: Position, text: &str) {
        let Some(line) = self.lines.get(at.line) else {
            return;
        };
        let column = at.column.min(line.chars().count());
        let split = Self::byte_offset(line, column);
        let head = line[..split].to_string();
        let tail = line[split..].to_string();

        let auto_advance = self.cursor == Position::new(at.line, column);

        let segments: Vec<&str> = text.split('\n').collect();
        if segments.len() == 1 {
            self.lines[at.line] = format!("{head}{text}{tail}");
            if auto_advance {
                self.cursor.column = column + text.chars().count();
            }
        } else {
            let mut replacement = Vec::with_capacity(segments.len());
            replacement.push(format!("{head}{}", segments[0]));
            for middle in &segments[1..segments.len() - 1] {
                replacement.push(middle.to_string());
            }
            let last = segments[segments.len() - 1];
            replacement.push(format!("{last}{tail}"));

            let end = Position::new(
                at.line + segments.len() - 1,
                last.chars().count(),
            );
            self.lines.splice(at.line..=at.line, replacement);
            if auto_advance {
                self.cursor = end;
            }
        }
    }

    fn move_cursor(&mut self, mv: CursorMove) {
        match mv {
            CursorMove::Up => {
                self.cursor.line = self.cursor.line.saturating_sub(1);
                self.clamp_column();
            }
            CursorMove::Down => {
                let last = self.lines.len().saturating_sub(1);
                self.cursor.line = (self.cursor.line + 1).min(last);
                self.clamp_column();
            }
            CursorMove::WrappedLineEnd => {
                self.cursor.column = self.line_len(self.cursor.line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_and_back() {
        let buffer = Buffer::from_text("a\nb\nc");
        assert_eq!(buffer.line_count(), 3);
        assert_eq!(buffer.line(1), Some("b"));
        assert_eq!(buffer.to_text(), "a\nb\nc");
    }

    #[test]
    fn test_empty_text_is_one_line() {
        let buffer = Buffer::from_text("");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0), Some(""));
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut buffer = Buffer::from_text("ab\ncdef");
        buffer.set_cursor(Position::new(9, 9));
        assert_eq!(buffer.cursor(), Position::new(1, 4));
    }

    #[test]
    fn test_single_line_insert() {
        let mut buffer = Buffer::from_text("hello world");
        buffer.insert(Position::new(0, 5), ",");
        assert_eq!(buffer.to_text(), "hello, world");
    }

    #[test]
    fn test_multi_line_insert() {
        let mut buffer = Buffer::from_text("ab");
        buffer.insert(Position::new(0, 1), "1\n2\n3");
        assert_eq!(buffer.to_text(), "a1\n2\n3b");
    }

    #[test]
    fn test_insert_at_cursor_auto_advances() {
        let mut buffer = Buffer::from_text("if (x)");
        buffer.set_cursor(Position::new(0, 6));
        buffer.insert(Position::new(0, 6), " {\n    \n}");

        assert_eq!(buffer.to_text(), "if (x) {\n    \n}");
        // Cursor lands after all inserted text, on the closing brace line.
        assert_eq!(buffer.cursor(), Position::new(2, 1));
    }

    #[test]
    fn test_insert_elsewhere_leaves_cursor() {
        let mut buffer = Buffer::from_text("if (x)");
        buffer.set_cursor(Position::new(0, 3));
        buffer.insert(Position::new(0, 6), " {\n    \n}");

        assert_eq!(buffer.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_insert_past_document_is_ignored() {
        let mut buffer = Buffer::from_text("ab");
        buffer.insert(Position::new(5, 0), "x");
        assert_eq!(buffer.to_text(), "ab");
    }

    #[test]
    fn test_move_up_clamps_column() {
        let mut buffer = Buffer::from_text("ab\nlonger line");
        buffer.set_cursor(Position::new(1, 10));
        buffer.move_cursor(CursorMove::Up);
        assert_eq!(buffer.cursor(), Position::new(0, 2));
    }

    #[test]
    fn test_move_down_stops_at_last_line() {
        let mut buffer = Buffer::from_text("a\nb");
        buffer.set_cursor(Position::new(1, 0));
        buffer.move_cursor(CursorMove::Down);
        assert_eq!(buffer.cursor().line, 1);
    }

    #[test]
    fn test_move_to_line_end() {
        let mut buffer = Buffer::from_text("hello");
        buffer.move_cursor(CursorMove::WrappedLineEnd);
        assert_eq!(buffer.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        let mut buffer = Buffer::from_text("héllo");
        buffer.insert(Position::new(0, 2), "X");
        assert_eq!(buffer.to_text(), "héXllo");
    }
}
