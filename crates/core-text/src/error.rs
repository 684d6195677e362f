use thiserror::Error;

/// The single failure kind of the buffer primitives: a supplied line or
/// column index lies outside the buffer's current bounds.
///
/// Returned before any mutation happens, so a caller holding this error knows
/// the buffer is exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfRange {
    /// `insert_line` position outside `-1..line_count`.
    #[error("cannot open a line after row {after} in a buffer of {line_count} line(s)")]
    InsertPoint { after: isize, line_count: usize },
    #[error("row {row} is out of range for a buffer of {line_count} line(s)")]
    Row { row: usize, line_count: usize },
    #[error("column {col} is not an insertion point of row {row} (length {len})")]
    Column { row: usize, col: usize, len: usize },
}
