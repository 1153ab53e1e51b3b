//! Game configuration.
//!
//! Board dimensions are fixed (4x4); what can be tuned is the tile geometry,
//! the match delay, the frame interval and the shuffle seed.

use crate::error::{ConfigurationError, Result};
use crate::types::{
    BOARD_COLS, BOARD_ROWS, INDICATOR_HEIGHT, INDICATOR_WIDTH, MATCH_DELAY_FRAMES, PANEL_GAP,
    TICK_MS, TILE_HEIGHT, TILE_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Tile width in board-space units (terminal columns)
    pub tile_width: u16,
    /// Tile height in board-space units (terminal rows)
    pub tile_height: u16,
    /// Frames a revealed pair stays up before it is resolved
    pub match_delay_frames: u32,
    /// Target frame interval for the play loop
    pub frame_ms: u32,
    /// Shuffle seed
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
            match_delay_frames: MATCH_DELAY_FRAMES,
            frame_ms: TICK_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_match_delay_frames(mut self, frames: u32) -> Self {
        self.match_delay_frames = frames;
        self
    }

    pub fn with_tile_size(mut self, width: u16, height: u16) -> Self {
        self.tile_width = width;
        self.tile_height = height;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(ConfigurationError::InvalidConfig(format!(
                "tile size must be non-zero, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        // Board plus side panel must stay addressable in u16 screen cells.
        let width = BOARD_COLS as u32 * self.tile_width as u32
            + PANEL_GAP as u32
            + INDICATOR_WIDTH as u32;
        let height = (BOARD_ROWS as u32 * self.tile_height as u32).max(INDICATOR_HEIGHT as u32);
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(ConfigurationError::InvalidConfig(format!(
                "tile size {}x{} makes the board {}x{} cells, larger than a screen can address",
                self.tile_width, self.tile_height, width, height
            )));
        }
        if self.match_delay_frames == 0 {
            return Err(ConfigurationError::InvalidConfig(
                "match delay must be at least one frame".to_string(),
            ));
        }
        if self.frame_ms == 0 {
            return Err(ConfigurationError::InvalidConfig(
                "frame interval must be at least 1ms".to_string(),
            ));
        }
        Ok(())
    }
}
