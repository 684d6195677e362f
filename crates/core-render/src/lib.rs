//! Viewport projection + terminal emission.
//!
//! Rendering is split into two halves:
//!
//! * [`render`] is a pure projection: given a [`LineBuffer`], a
//!   [`ViewportState`] and the window size it returns a [`Frame`], the ordered
//!   `(row, text)` draw instructions for a full repaint. No terminal I/O, so
//!   it is testable without a tty and idempotent for unchanged inputs.
//! * [`writer::Writer`] consumes a `Frame` and emits crossterm commands
//!   (clear, move, print) into any `io::Write` sink.
//!
//! Every frame is a full repaint: the writer clears the screen and draws each
//! instruction. There is no diffing against the previous frame.
//!
//! Invariants:
//! - Instructions are emitted in ascending row order, at most one per row.
//! - Row `i` shows buffer line `i + y_offset`; rows past the end of the buffer
//!   get no instruction and stay blank.
//! - `x_offset` does not influence line selection or content.
//! - Instructions borrow the buffer, so a frame must be consumed before the
//!   next mutation.

use core_text::LineBuffer;
use tracing::debug;

pub mod viewport;
pub mod writer;

pub use viewport::ViewportState;

/// Place `text` at display row `row`, column 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawInstruction<'a> {
    pub row: u16,
    pub text: &'a str,
}

impl<'a> DrawInstruction<'a> {
    pub fn new(row: u16, text: &'a str) -> Self {
        Self { row, text }
    }
}

/// One full repaint of a `width` x `height` window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    pub width: u16,
    pub height: u16,
    instructions: Vec<DrawInstruction<'a>>,
}

impl<'a> Frame<'a> {
    pub fn instructions(&self) -> &[DrawInstruction<'a>] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

impl<'a> IntoIterator for Frame<'a> {
    type Item = DrawInstruction<'a>;
    type IntoIter = std::vec::IntoIter<DrawInstruction<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.into_iter()
    }
}

/// Project the visible slice of `buffer` onto a `width` x `height` window.
pub fn render<'a>(
    buffer: &'a LineBuffer,
    viewport: &ViewportState,
    width: u16,
    height: u16,
) -> Frame<'a> {
    let instructions: Vec<DrawInstruction<'a>> = (0..height)
        .map_while(|row| {
            let idx = viewport.y_offset.checked_add(usize::from(row))?;
            buffer
                .line_at(idx)
                .map(|text| DrawInstruction::new(row, text))
        })
        .collect();
    debug!(
        target: "render",
        width,
        height,
        y_offset = viewport.y_offset,
        line_count = buffer.line_count(),
        rows = instructions.len(),
        "frame"
    );
    Frame {
        width,
        height,
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn buf(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines("test", lines.iter().copied())
    }

    #[test]
    fn scrolled_viewport_selects_lines_by_vertical_offset() {
        let b = buf(&["a", "b", "c"]);
        let frame = render(&b, &ViewportState::new(0, 1), 80, 2);
        assert_eq!(
            frame.instructions(),
            &[DrawInstruction::new(0, "b"), DrawInstruction::new(1, "c")]
        );
    }

    #[test]
    fn rows_past_buffer_end_are_left_blank() {
        let b = buf(&["a", "b"]);
        let frame = render(&b, &ViewportState::default(), 80, 5);
        assert_eq!(
            frame.instructions(),
            &[DrawInstruction::new(0, "a"), DrawInstruction::new(1, "b")]
        );
    }

    #[test]
    fn horizontal_offset_does_not_change_content() {
        let b = buf(&["hello", "world"]);
        let plain = render(&b, &ViewportState::new(0, 0), 80, 2);
        let shifted = render(&b, &ViewportState::new(3, 0), 80, 2);
        assert_eq!(plain, shifted);
    }

    #[test]
    fn zero_height_and_empty_buffer_yield_nothing() {
        let b = buf(&["a"]);
        assert!(render(&b, &ViewportState::default(), 80, 0).is_empty());
        let empty = buf(&[]);
        assert!(render(&empty, &ViewportState::default(), 80, 10).is_empty());
    }

    #[test]
    fn offset_past_end_yields_nothing() {
        let b = buf(&["a", "b"]);
        assert!(render(&b, &ViewportState::new(0, 2), 80, 3).is_empty());
        assert!(render(&b, &ViewportState::new(0, usize::MAX), 80, 3).is_empty());
    }

    #[test]
    fn frame_carries_window_size() {
        let b = buf(&["a"]);
        let frame = render(&b, &ViewportState::default(), 40, 7);
        assert_eq!((frame.width, frame.height), (40, 7));
        let rows: Vec<u16> = frame.into_iter().map(|d| d.row).collect();
        assert_eq!(rows, vec![0]);
    }
}
