//! Input handler: raw terminal events in, game actions out.
//!
//! Keyboard navigation is resolved here so the game only ever sees
//! coordinate selections, whichever device produced them.

use crossterm::event::{Event, KeyEventKind};

use crate::cursor::CursorState;
use crate::map::{handle_key_event, mouse_selection, should_quit, KeyIntent};
use crate::types::{GameAction, Point};

#[derive(Debug, Clone)]
pub struct InputHandler {
    cursor: CursorState,
    rows: u8,
    cols: u8,
    tile_width: u16,
    tile_height: u16,
}

impl InputHandler {
    pub fn new(rows: u8, cols: u8, tile_width: u16, tile_height: u16) -> Self {
        Self {
            cursor: CursorState::default(),
            rows,
            cols,
            tile_width,
            tile_height,
        }
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Handle one terminal event.
    ///
    /// `origin` is the screen cell of the board's top-left corner, used to
    /// translate mouse positions into board space.
    pub fn handle_event(&mut self, event: &Event, origin: (u16, u16)) -> Option<GameAction> {
        match event {
            Event::Key(key) => {
                // Ignore releases and terminal auto-repeat.
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                if should_quit(*key) {
                    return Some(GameAction::Close);
                }
                self.apply_intent(handle_key_event(*key)?)
            }
            Event::Mouse(mouse) => {
                let p = mouse_selection(*mouse, origin)?;
                self.follow_click(p);
                Some(GameAction::Select(p))
            }
            _ => None,
        }
    }

    fn apply_intent(&mut self, intent: KeyIntent) -> Option<GameAction> {
        let (rows, cols) = (self.rows, self.cols);
        match intent {
            KeyIntent::CursorUp => self.cursor.move_by(-1, 0, rows, cols),
            KeyIntent::CursorDown => self.cursor.move_by(1, 0, rows, cols),
            KeyIntent::CursorLeft => self.cursor.move_by(0, -1, rows, cols),
            KeyIntent::CursorRight => self.cursor.move_by(0, 1, rows, cols),
            KeyIntent::Confirm => {
                let p = self.cursor.target(self.tile_width, self.tile_height);
                return Some(GameAction::Select(p));
            }
            KeyIntent::Restart => return Some(GameAction::Restart),
        }
        None
    }

    /// Move the cursor onto a clicked tile so keyboard play continues from there
    fn follow_click(&mut self, p: Point) {
        if p.x < 0 || p.y < 0 || self.tile_width == 0 || self.tile_height == 0 {
            return;
        }
        let col = p.x / self.tile_width as i32;
        let row = p.y / self.tile_height as i32;
        if row < self.rows as i32 && col < self.cols as i32 {
            self.cursor = CursorState::new(row as u8, col as u8);
        }
    }
}
