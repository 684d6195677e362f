//! Terminal writer: turns a [`Frame`] into crossterm commands.
//!
//! The writer queues every command for a frame and flushes once, so the
//! terminal never shows a half-drawn screen.
//!
//! Design invariants:
//! * Commands preserve ordering; no flushing mid-frame.
//! * A frame always starts with a full-screen clear.
//! * All positions are absolute with a (0,0) origin.
//! * Printed text never exceeds the frame width: lines are clipped at the last
//!   grapheme cluster that fits entirely.

use crate::Frame;
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ClearAll,
    MoveTo(u16, u16),
    Print(String),
}

#[derive(Debug, Default)]
pub struct Writer {
    cmds: Vec<Command>,
}

impl Writer {
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    /// Build the full-repaint command list for `frame`.
    pub fn for_frame(frame: &Frame<'_>) -> Self {
        let mut w = Self::new();
        w.clear_all();
        for ins in frame.instructions() {
            w.move_to(0, ins.row);
            w.print(clip_to_width(ins.text, frame.width));
        }
        w
    }

    pub fn clear_all(&mut self) {
        self.cmds.push(Command::ClearAll);
    }
    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cmds.push(Command::MoveTo(x, y));
    }
    pub fn print<S: Into<String>>(&mut self, s: S) {
        let s: String = s.into();
        if !s.is_empty() {
            self.cmds.push(Command::Print(s));
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.cmds
    }

    /// Queue every command into `out` and flush it once.
    pub fn flush_to<W: Write>(self, out: &mut W) -> Result<()> {
        for c in self.cmds {
            match c {
                Command::ClearAll => {
                    queue!(out, Clear(ClearType::All))?;
                }
                Command::MoveTo(x, y) => {
                    queue!(out, MoveTo(x, y))?;
                }
                Command::Print(s) => {
                    queue!(out, Print(s))?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn flush(self) -> Result<()> {
        self.flush_to(&mut stdout())
    }
}

/// Longest prefix of `text` whose display width fits in `width` columns.
pub fn clip_to_width(text: &str, width: u16) -> &str {
    let limit = usize::from(width);
    let mut used = 0usize;
    for (idx, g) in text.grapheme_indices(true) {
        used += g.width();
        if used > limit {
            return &text[..idx];
        }
    }
    text
}
