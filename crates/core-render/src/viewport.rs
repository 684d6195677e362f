//! Viewport scroll state.
//!
//! `ViewportState` is owned by the editor session, written by scroll commands
//! and read by [`crate::render`]. It holds no reference to the buffer; callers
//! re-clamp it with [`ViewportState::clamp_to`] after the document shrinks or
//! when a scroll would run past the last line.
//!
//! Current guarantees:
//! * `y_offset` is the index of the topmost buffer line drawn at display row 0.
//! * `x_offset` is tracked (scroll commands update it) but the projection does
//!   not yet apply it to line content.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportState {
    pub x_offset: usize,
    pub y_offset: usize,
}

impl ViewportState {
    pub fn new(x_offset: usize, y_offset: usize) -> Self {
        Self { x_offset, y_offset }
    }

    /// Shift both offsets by signed deltas, saturating at zero.
    pub fn scroll_by(&mut self, dx: isize, dy: isize) {
        self.x_offset = self.x_offset.saturating_add_signed(dx);
        self.y_offset = self.y_offset.saturating_add_signed(dy);
    }

    pub fn scroll_to(&mut self, x_offset: usize, y_offset: usize) {
        self.x_offset = x_offset;
        self.y_offset = y_offset;
    }

    /// Keep `y_offset` on an existing line (or 0 for an empty buffer).
    pub fn clamp_to(&mut self, line_count: usize) {
        let max = line_count.saturating_sub(1);
        if self.y_offset > max {
            self.y_offset = max;
        }
    }

    /// Adjust `y_offset` so `line` falls inside a window of `height` rows.
    pub fn reveal_line(&mut self, line: usize, height: usize) {
        if height == 0 {
            return;
        }
        if line < self.y_offset {
            self.y_offset = line;
        } else if line >= self.y_offset + height {
            self.y_offset = line + 1 - height;
        }
    }
}
