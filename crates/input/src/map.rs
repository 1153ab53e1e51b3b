//! Key and mouse mapping from terminal events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::Point;

/// What a key press asks for, before it is resolved against the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Select the tile under the cursor
    Confirm,
    Restart,
}

/// Map keyboard input to an intent.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyIntent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(KeyIntent::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(KeyIntent::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(KeyIntent::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(KeyIntent::CursorRight)
        }

        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyIntent::Confirm),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyIntent::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate a left-button release into a board-space point.
///
/// `origin` is the screen cell of the board's top-left corner. Clicks left of
/// or above it come out negative and hit no tile.
pub fn mouse_selection(mouse: MouseEvent, origin: (u16, u16)) -> Option<Point> {
    match mouse.kind {
        MouseEventKind::Up(MouseButton::Left) => Some(Point::new(
            mouse.column as i32 - origin.0 as i32,
            mouse.row as i32 - origin.1 as i32,
        )),
        _ => None,
    }
}
