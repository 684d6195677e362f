//! Property tests for the viewport projection.

use core_render::{DrawInstruction, ViewportState, render};
use core_text::LineBuffer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn render_is_idempotent(
        lines in prop::collection::vec("[a-z ]{0,20}", 0..40),
        x in 0usize..50,
        y in 0usize..50,
        width in 0u16..200,
        height in 0u16..60,
    ) {
        let b = LineBuffer::from_lines("p", lines);
        let vp = ViewportState::new(x, y);
        let first = render(&b, &vp, width, height);
        let second = render(&b, &vp, width, height);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn row_i_shows_line_i_plus_offset(
        lines in prop::collection::vec("[a-z]{0,8}", 0..40),
        y in 0usize..50,
        height in 0u16..60,
    ) {
        let b = LineBuffer::from_lines("p", lines.clone());
        let frame = render(&b, &ViewportState::new(0, y), 80, height);
        let expected: Vec<DrawInstruction<'_>> = (0..height)
            .filter_map(|row| {
                lines
                    .get(y + usize::from(row))
                    .map(|l| DrawInstruction::new(row, l.as_str()))
            })
            .collect();
        prop_assert_eq!(frame.instructions(), expected.as_slice());
        prop_assert!(frame.instructions().len() <= usize::from(height));
    }
}
