use core_text::LineBuffer;

/// Cursor position as (line index, byte column within that line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Move `dy` lines then `dx` characters. The row is clamped to the buffer
    /// and the column to the target line, snapping back onto a char boundary.
    pub(crate) fn shift(&mut self, buffer: &LineBuffer, dx: isize, dy: isize) {
        let last = buffer.line_count().saturating_sub(1);
        self.row = self.row.saturating_add_signed(dy).min(last);
        let Some(line) = buffer.line_at(self.row) else {
            *self = Self::origin();
            return;
        };
        self.col = floor_char_boundary(line, self.col.min(line.len()));
        if dx > 0 {
            for c in line[self.col..].chars().take(dx.unsigned_abs()) {
                self.col += c.len_utf8();
            }
        } else if dx < 0 {
            for c in line[..self.col].chars().rev().take(dx.unsigned_abs()) {
                self.col -= c.len_utf8();
            }
        }
    }
}

fn floor_char_boundary(line: &str, mut col: usize) -> usize {
    while !line.is_char_boundary(col) {
        col -= 1;
    }
    col
}
