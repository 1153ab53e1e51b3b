use arrayvec::ArrayVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{ImageId, Indicator, Rect, TurnPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileSnapshot {
    pub rect: Rect,
    pub revealed: bool,
    /// Only set while the tile is face-up
    pub image: Option<ImageId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionSnapshot {
    pub rows: u8,
    pub cols: u8,
    pub tiles: Vec<TileSnapshot>,
    pub pending: ArrayVec<usize, 2>,
    pub phase: TurnPhase,
    pub indicator: Indicator,
    pub indicator_rect: Rect,
    pub elapsed_secs: u64,
    pub matched_tiles: u32,
    pub finished: bool,
    pub episode_id: u32,
}

impl SessionSnapshot {
    /// Board extent (right, bottom) in board space
    pub fn board_extent(&self) -> (i32, i32) {
        self.tiles.iter().fold((0, 0), |(w, h), t| {
            (w.max(t.rect.right()), h.max(t.rect.bottom()))
        })
    }

    pub fn is_pending(&self, index: usize) -> bool {
        self.pending.contains(&index)
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            tiles: Vec::new(),
            pending: ArrayVec::new(),
            phase: TurnPhase::Idle,
            indicator: Indicator::Idle,
            indicator_rect: Rect::default(),
            elapsed_secs: 0,
            matched_tiles: 0,
            finished: false,
            episode_id: 0,
        }
    }
}
