//! Editor session model.
//!
//! `EditorModel` is the single owner of the session state the input layer
//! drives: the [`LineBuffer`], the [`ViewportState`] and a cursor. The input
//! layer decides *what* happened (a key, a resize) and expresses it either as
//! a raw [`EditCommand`] or through the cursor helpers; the model runs the
//! buffer primitive and hands back frames for repaint.
//!
//! Core invariants (must hold after every public call):
//! * The buffer is only mutated through `insert_line` / `insert_text`.
//! * A failed command changes nothing: buffer, viewport and cursor are left
//!   as they were and the `OutOfRange` is returned unchanged.
//! * The cursor row is a valid line index whenever the buffer is non-empty,
//!   and the cursor column sits on a character boundary of that line.
//!
//! The model holds no terminal handle; `frame` is the pure projection and the
//! caller decides where the writer output goes.

use core_render::{Frame, ViewportState, render};
use core_text::{LineBuffer, OutOfRange};
use tracing::debug;

mod cursor;
pub use cursor::Cursor;

/// A raw edit or scroll request coming from the input layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Open an empty line after `after` (`-1` = before the first line).
    InsertLine { after: isize },
    /// Splice `fragment` into line `row` at byte column `col`.
    InsertText {
        row: usize,
        col: usize,
        fragment: String,
    },
    ScrollBy { dx: isize, dy: isize },
    ScrollTo { x: usize, y: usize },
}

#[derive(Debug, Clone)]
pub struct EditorModel {
    buffer: LineBuffer,
    viewport: ViewportState,
    cursor: Cursor,
}

impl EditorModel {
    pub fn new(buffer: LineBuffer) -> Self {
        Self {
            buffer,
            viewport: ViewportState::default(),
            cursor: Cursor::origin(),
        }
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Run one raw command against the session. After a successful command
    /// the cursor is snapped back onto a valid row and char boundary.
    ///
    /// # Errors
    /// Propagates the buffer's [`OutOfRange`] untouched. Scroll commands never
    /// fail.
    pub fn apply(&mut self, cmd: EditCommand) -> Result<(), OutOfRange> {
        let res = match &cmd {
            EditCommand::InsertLine { after } => self.buffer.insert_line(*after),
            EditCommand::InsertText { row, col, fragment } => {
                self.buffer.insert_text(*row, *col, fragment)
            }
            EditCommand::ScrollBy { dx, dy } => {
                self.viewport.scroll_by(*dx, *dy);
                Ok(())
            }
            EditCommand::ScrollTo { x, y } => {
                self.viewport.scroll_to(*x, *y);
                Ok(())
            }
        };
        match &res {
            Ok(()) => self.cursor.shift(&self.buffer, 0, 0),
            Err(e) => debug!(target: "model", ?cmd, error = %e, "command_rejected"),
        }
        res
    }

    /// Full-repaint projection of the current session state.
    pub fn frame(&self, width: u16, height: u16) -> Frame<'_> {
        render(&self.buffer, &self.viewport, width, height)
    }

    /// Insert `text` at the cursor and advance past it.
    ///
    /// # Errors
    /// `OutOfRange` when the buffer has no line under the cursor.
    pub fn type_text(&mut self, text: &str) -> Result<(), OutOfRange> {
        let Cursor { row, col } = self.cursor;
        self.apply(EditCommand::InsertText {
            row,
            col,
            fragment: text.to_owned(),
        })?;
        self.cursor.col += text.len();
        Ok(())
    }

    /// Open an empty line below the cursor row and move onto it. On an empty
    /// buffer this creates the first line.
    ///
    /// # Errors
    /// `OutOfRange` is not expected while the cursor invariant holds; it is
    /// still surfaced rather than swallowed.
    pub fn open_line_below(&mut self) -> Result<(), OutOfRange> {
        if self.buffer.is_empty() {
            self.apply(EditCommand::InsertLine { after: -1 })?;
            self.cursor = Cursor::origin();
            return Ok(());
        }
        let after = isize::try_from(self.cursor.row).unwrap_or(isize::MAX);
        self.apply(EditCommand::InsertLine { after })?;
        self.cursor = Cursor::new(self.cursor.row + 1, 0);
        Ok(())
    }

    /// Move the cursor by `dx` characters and `dy` lines, clamped to the
    /// buffer.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        self.cursor.shift(&self.buffer, dx, dy);
    }

    /// Scroll vertically just enough for the cursor row to be visible in a
    /// window of `height` rows.
    pub fn follow_cursor(&mut self, height: u16) {
        self.viewport.reveal_line(self.cursor.row, usize::from(height));
    }

    /// Scroll by whole lines, keeping the top row on an existing line.
    pub fn scroll_lines(&mut self, dy: isize) {
        self.viewport.scroll_by(0, dy);
        self.viewport.clamp_to(self.buffer.line_count());
    }
}
