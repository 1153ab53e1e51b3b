//! Keyboard selection cursor.

use crate::types::Point;

/// Cursor over the tile grid, in (row, col) cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorState {
    pub row: u8,
    pub col: u8,
}

impl CursorState {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Moves the cursor by the given delta, clamped to the grid.
    pub fn move_by(&mut self, d_row: i32, d_col: i32, rows: u8, cols: u8) {
        if rows == 0 || cols == 0 {
            return;
        }
        self.row = (self.row as i32 + d_row).clamp(0, rows as i32 - 1) as u8;
        self.col = (self.col as i32 + d_col).clamp(0, cols as i32 - 1) as u8;
    }

    /// Board-space point at the centre of the tile under the cursor
    pub fn target(&self, tile_width: u16, tile_height: u16) -> Point {
        Point::new(
            self.col as i32 * tile_width as i32 + (tile_width / 2) as i32,
            self.row as i32 * tile_height as i32 + (tile_height / 2) as i32,
        )
    }
}
