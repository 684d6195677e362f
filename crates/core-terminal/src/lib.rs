//! Terminal lifecycle over crossterm.
//!
//! The display is a scoped resource: [`CrosstermBackend::enter_guard`] puts
//! the terminal in raw mode on the alternate screen and returns a
//! [`TerminalGuard`] that restores it when dropped, including on early
//! return and panic unwinding. Leaving twice is a no-op.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
        size,
    },
};
use std::io::stdout;
use tracing::debug;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current window size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

#[derive(Debug)]
pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
#[derive(Debug)]
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard { backend: self })
    }
}

impl TerminalGuard<'_> {
    pub fn size(&self) -> Result<(u16, u16)> {
        self.backend.size()
    }

    /// Show the hardware cursor at (x, y).
    pub fn place_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        execute!(stdout(), MoveTo(x, y), Show)?;
        Ok(())
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
            self.entered = true;
            debug!(target: "terminal", "entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
            debug!(target: "terminal", "left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(size()?)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        let _ = self.backend.leave();
    }
}
