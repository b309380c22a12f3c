//! Host-editor interface
//!
//! The completer core is pure; this module is the seam to a real editor. A
//! host exposes the narrow capabilities the command needs (read the selection
//! and line text, insert text, move the cursor) and [`apply_action`]
//! translates an [`EditAction`] into host calls.

use crate::action::{CursorMove, EditAction, Position};
use crate::complete::{complete_statement, CompleteOptions, Line};

/// The capabilities a host editor must provide.
///
/// `insert` takes current-document coordinates; [`apply_action`] translates
/// the plan's pre-edit positions before calling it. Cursor moves are issued
/// one directive at a time, in order, after all insertions.
pub trait HostEditor {
    /// Start of the current selection: the line the command operates on
    fn selection_start(&self) -> Position;

    /// The active cursor, if the host can report one. `None` degrades the
    /// end-of-line check to false.
    fn active_cursor(&self) -> Option<Position>;

    /// Text of the given line, without its terminator
    fn line_text(&self, line: usize) -> Option<String>;

    /// Insert literal text at a position, as part of the current edit batch
    fn insert(&mut self, at: Position, text: &str);

    /// Apply one cursor-movement directive
    fn move_cursor(&mut self, mv: CursorMove);
}

/// Apply an edit plan to a host: insertions first, then cursor moves.
///
/// Insertions in a plan address pre-edit positions. A later insertion at the
/// same position as an earlier one lands after the earlier one's text, so the
/// batch composes in order the way a single editor edit does.
pub fn apply_action<H: HostEditor + ?Sized>(host: &mut H, action: &EditAction) {
    // (original position, where the next insertion at it lands now)
    let mut landed: Vec<(Position, Position)> = Vec::new();

    for insertion in &action.insertions {
        let effective = landed
            .iter()
            .find(|(orig, _)| *orig == insertion.at)
            .map(|(_, next)| *next)
            .unwrap_or(insertion.at);

        host.insert(effective, &insertion.text);

        let end = end_of_inserted(effective, &insertion.text);
        match landed.iter_mut().find(|(orig, _)| *orig == insertion.at) {
            Some(entry) => entry.1 = end,
            None => landed.push((insertion.at, end)),
        }
    }

    for mv in &action.cursor_moves {
        host.move_cursor(*mv);
    }
}

/// Position just past `text` when inserted at `at`
fn end_of_inserted(at: Position, text: &str) -> Position {
    match text.rfind('\n') {
        Some(last_newline) => {
            let lines_added = text.matches('\n').count();
            let tail = &text[last_newline + 1..];
            Position::new(at.line + lines_added, tail.chars().count())
        }
        None => Position::new(at.line, at.column + text.chars().count()),
    }
}

/// Run one completion keystroke against a host.
///
/// Reads the selection's line, synthesizes the plan, applies it, and returns
/// the plan. A selection outside the document yields an empty plan; nothing
/// here can fail in a user-visible way.
pub fn run_completion<H: HostEditor + ?Sized>(host: &mut H, opts: &CompleteOptions) -> EditAction {
    let selection = host.selection_start();
    let Some(text) = host.line_text(selection.line) else {
        return EditAction::none();
    };

    let line = Line::new(selection.line, &text);
    let action = complete_statement(&line, host.active_cursor(), opts);
    apply_action(host, &action);
    action
}
