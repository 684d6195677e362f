//! Fixed key mapping from crossterm events to editor intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Quit,
    Type(char),
    OpenLine,
    Move { dx: isize, dy: isize },
    PageUp,
    PageDown,
}

/// `None` for key releases and unmapped keys.
pub fn translate(key: &KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let intent = match key.code {
        KeyCode::Esc => Intent::Quit,
        KeyCode::Char('q') if ctrl => Intent::Quit,
        KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => Intent::Type(c),
        KeyCode::Enter => Intent::OpenLine,
        KeyCode::Left => Intent::Move { dx: -1, dy: 0 },
        KeyCode::Right => Intent::Move { dx: 1, dy: 0 },
        KeyCode::Up => Intent::Move { dx: 0, dy: -1 },
        KeyCode::Down => Intent::Move { dx: 0, dy: 1 },
        KeyCode::PageUp => Intent::PageUp,
        KeyCode::PageDown => Intent::PageDown,
        _ => return None,
    };
    Some(intent)
}
