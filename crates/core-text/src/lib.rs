//! Line-oriented text buffer.
//!
//! `LineBuffer` owns the document as an ordered `Vec<String>`, one owned
//! string per logical line. Exactly two primitives mutate it:
//!
//! * [`LineBuffer::insert_line`] opens a new empty line after a given row
//!   (`-1` opens one above the first line).
//! * [`LineBuffer::insert_text`] splices a fragment into an existing line at
//!   a byte column.
//!
//! Invariants (hold after every public call):
//! * `line_count() == lines.len()`.
//! * Every line is an independently owned `String`; nothing outside the
//!   buffer can hold a reference into it across a mutation (enforced by the
//!   borrow checker, the read surface only hands out `&str`).
//! * A call that returns `Err(OutOfRange)` performed no mutation. All bounds
//!   are validated before the first write.
//!
//! Columns are byte offsets into the UTF-8 line. A column inside a multi-byte
//! character is not an insertion point and is rejected like any other
//! out-of-range column.

use tracing::trace;

mod error;
pub use error::OutOfRange;

/// An ordered sequence of owned text lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
    name: String,
}

impl LineBuffer {
    /// Build a buffer from already split lines. An empty iterator yields a
    /// buffer with zero lines.
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }

    /// Build a buffer by splitting `text` on line endings (`\n` or `\r\n`).
    /// Empty text still produces one empty line so an editor always has a
    /// row to type into.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Content of line `idx`, or `None` past the end.
    pub fn line_at(&self, idx: usize) -> Option<&str> {
        self.lines.get(idx).map(String::as_str)
    }

    /// Byte length of line `idx`.
    pub fn line_len(&self, idx: usize) -> Option<usize> {
        self.lines.get(idx).map(String::len)
    }

    /// Iterate all lines top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Insert a new empty line immediately after `row`.
    ///
    /// `row` must satisfy `-1 <= row < line_count()`; `-1` makes the new line
    /// the first line of the document.
    ///
    /// # Errors
    /// Returns [`OutOfRange::InsertPoint`] for any other `row`; the buffer is
    /// left untouched.
    pub fn insert_line(&mut self, row: isize) -> Result<(), OutOfRange> {
        let line_count = self.lines.len();
        let at = row
            .checked_add(1)
            .and_then(|at| usize::try_from(at).ok())
            .filter(|&at| at <= line_count)
            .ok_or(OutOfRange::InsertPoint {
                after: row,
                line_count,
            })?;
        self.lines.insert(at, String::new());
        trace!(target: "buffer", row, at, line_count = self.lines.len(), "insert_line");
        Ok(())
    }

    /// Splice `fragment` into line `row` at byte column `col`.
    ///
    /// `col == line length` appends. The full fragment is inserted.
    ///
    /// # Errors
    /// [`OutOfRange::Row`] when `row >= line_count()`; [`OutOfRange::Column`]
    /// when `col` is past the end of the line or not on a character boundary.
    /// Either way the buffer is left untouched.
    pub fn insert_text(
        &mut self,
        row: usize,
        col: usize,
        fragment: &str,
    ) -> Result<(), OutOfRange> {
        let line_count = self.lines.len();
        let line = self
            .lines
            .get_mut(row)
            .ok_or(OutOfRange::Row { row, line_count })?;
        if !line.is_char_boundary(col) {
            return Err(OutOfRange::Column {
                row,
                col,
                len: line.len(),
            });
        }
        line.insert_str(col, fragment);
        trace!(
            target: "buffer",
            row,
            col,
            fragment_len = fragment.len(),
            line_len = line.len(),
            "insert_text"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines("test", lines.iter().copied())
    }

    fn contents(b: &LineBuffer) -> Vec<&str> {
        b.lines().collect()
    }

    #[test]
    fn insert_line_after_last_row() {
        let mut b = buf(&["abc"]);
        b.insert_line(0).unwrap();
        assert_eq!(b.line_count(), 2);
        assert_eq!(contents(&b), vec!["abc", ""]);
    }

    #[test]
    fn insert_line_minus_one_prepends() {
        let mut b = buf(&["abc"]);
        b.insert_line(-1).unwrap();
        assert_eq!(b.line_count(), 2);
        assert_eq!(contents(&b), vec!["", "abc"]);
    }

    #[test]
    fn insert_line_in_middle_shifts_tail() {
        let mut b = buf(&["a", "b", "c"]);
        b.insert_line(1).unwrap();
        assert_eq!(contents(&b), vec!["a", "b", "", "c"]);
    }

    #[test]
    fn insert_line_into_empty_buffer_only_accepts_minus_one() {
        let mut b = buf(&[]);
        assert_eq!(
            b.insert_line(0),
            Err(OutOfRange::InsertPoint {
                after: 0,
                line_count: 0
            })
        );
        b.insert_line(-1).unwrap();
        assert_eq!(contents(&b), vec![""]);
    }

    #[test]
    fn insert_line_rejects_out_of_range_rows() {
        let mut b = buf(&["a", "b"]);
        let before = b.clone();
        assert!(b.insert_line(2).is_err());
        assert!(b.insert_line(-2).is_err());
        assert!(b.insert_line(isize::MAX).is_err());
        assert!(b.insert_line(isize::MIN).is_err());
        assert_eq!(b, before);
    }

    #[test]
    fn insert_text_splices_fragment() {
        let mut b = buf(&["abc"]);
        b.insert_text(0, 1, "XY").unwrap();
        assert_eq!(contents(&b), vec!["aXYbc"]);
    }

    #[test]
    fn insert_text_at_line_end_appends() {
        let mut b = buf(&["ab", "cd"]);
        b.insert_text(1, 2, "e").unwrap();
        assert_eq!(contents(&b), vec!["ab", "cde"]);
    }

    #[test]
    fn insert_text_empty_fragment_is_noop_success() {
        let mut b = buf(&["ab"]);
        b.insert_text(0, 1, "").unwrap();
        assert_eq!(contents(&b), vec!["ab"]);
    }

    #[test]
    fn insert_text_past_line_end_fails_unchanged() {
        let mut b = buf(&["ab"]);
        let err = b.insert_text(0, 5, "Z").unwrap_err();
        assert_eq!(
            err,
            OutOfRange::Column {
                row: 0,
                col: 5,
                len: 2
            }
        );
        assert_eq!(contents(&b), vec!["ab"]);
    }

    #[test]
    fn insert_text_huge_row_reports_exact_index() {
        let mut b = buf(&["ab"]);
        assert_eq!(
            b.insert_text(usize::MAX, 0, "Z"),
            Err(OutOfRange::Row {
                row: usize::MAX,
                line_count: 1
            })
        );
    }

    #[test]
    fn insert_text_bad_row_fails_unchanged() {
        let mut b = buf(&["ab"]);
        let err = b.insert_text(1, 0, "Z").unwrap_err();
        assert_eq!(
            err,
            OutOfRange::Row {
                row: 1,
                line_count: 1
            }
        );
        assert_eq!(contents(&b), vec!["ab"]);
    }

    #[test]
    fn insert_text_inside_multibyte_char_is_rejected() {
        let mut b = buf(&["é!"]);
        // 'é' occupies bytes 0..2
        assert!(matches!(
            b.insert_text(0, 1, "x"),
            Err(OutOfRange::Column { col: 1, len: 3, .. })
        ));
        b.insert_text(0, 2, "x").unwrap();
        assert_eq!(contents(&b), vec!["éx!"]);
    }

    #[test]
    fn from_text_splits_lines_and_keeps_one_line_minimum() {
        let b = LineBuffer::from_text("t", "one\r\ntwo\n");
        assert_eq!(contents(&b), vec!["one", "two"]);
        let empty = LineBuffer::from_text("t", "");
        assert_eq!(empty.line_count(), 1);
        assert_eq!(empty.line_at(0), Some(""));
        assert_eq!(empty.name(), "t");
    }

    #[test]
    fn read_accessors() {
        let b = buf(&["ab", "cde"]);
        assert_eq!(b.line_at(1), Some("cde"));
        assert_eq!(b.line_at(2), None);
        assert_eq!(b.line_len(1), Some(3));
        assert_eq!(b.line_len(9), None);
        assert!(!b.is_empty());
        assert!(buf(&[]).is_empty());
    }
}
