//! Edit-plan data model
//!
//! The completer core returns a pure value: an ordered list of text
//! insertions plus an ordered list of cursor-movement directives. A thin
//! adapter applies the plan to a real host, which keeps the core testable
//! with zero host dependency.

use serde::{Deserialize, Serialize};

/// A (line, column) document position. Both are zero-based; columns count
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One literal text insertion at an exact document position.
///
/// Positions address the document as it was before the batch was applied;
/// the host composes insertions in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insertion {
    pub at: Position,
    pub text: String,
}

impl Insertion {
    pub fn new(at: Position, text: impl Into<String>) -> Self {
        Self { at, text: text.into() }
    }
}

/// A cursor-movement directive, issued to the host after the edit batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorMove {
    /// Up one line
    Up,
    /// Down one line
    Down,
    /// To the end of the (possibly soft-wrapped) current line
    WrappedLineEnd,
}

/// The complete result of one completer invocation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditAction {
    /// Text insertions, applied atomically as one undoable batch
    pub insertions: Vec<Insertion>,
    /// Cursor moves, issued in order after the batch
    pub cursor_moves: Vec<CursorMove>,
}

impl EditAction {
    /// An action with no insertions and no moves
    pub fn none() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, at: Position, text: impl Into<String>) {
        self.insertions.push(Insertion::new(at, text));
    }

    pub fn move_cursor(&mut self, mv: CursorMove) {
        self.cursor_moves.push(mv);
    }

    /// Whether the action changes document text
    pub fn has_edits(&self) -> bool {
        !self.insertions.is_empty()
    }
}
