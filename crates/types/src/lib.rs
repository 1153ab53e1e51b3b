//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are plain data with no I/O, so they can be shared by the core
//! state machine, the terminal renderer and the input mapping.
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid of tiles hiding eight image pairs:
//!
//! - **Rows / columns**: 4 x 4 (indexed 0-3, row-major)
//! - **Tiles**: 16
//! - **Pairs**: 8
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval (~60 FPS) |
//! | `MATCH_DELAY_FRAMES` | 30 | Frames both tiles stay visible before the match is decided |
//!
//! The match delay is counted in frames, not milliseconds, so it scales with
//! the frame rate.
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{Point, Rect, TurnPhase, TILE_COUNT};
//!
//! let tile = Rect::new(10, 0, 10, 5);
//! assert!(tile.contains(Point::new(10, 0)));
//! assert!(!tile.contains(Point::new(20, 0)));
//!
//! assert_eq!(TurnPhase::Idle.pending_len(), 0);
//! assert_eq!(TILE_COUNT, 16);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board rows
pub const BOARD_ROWS: u8 = 4;

/// Board columns
pub const BOARD_COLS: u8 = 4;

/// Total number of tiles on the board
pub const TILE_COUNT: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// Number of distinct images (each one appears on exactly two tiles)
pub const PAIR_COUNT: usize = TILE_COUNT / 2;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames a revealed pair stays visible before it is matched or flipped back
pub const MATCH_DELAY_FRAMES: u32 = 30;

/// Default tile width in terminal columns
pub const TILE_WIDTH: u16 = 10;

/// Default tile height in terminal rows
pub const TILE_HEIGHT: u16 = 5;

/// Gap between the board and the side panel
pub const PANEL_GAP: u16 = 2;

/// Indicator width in terminal columns
pub const INDICATOR_WIDTH: u16 = 12;

/// Indicator height in terminal rows
pub const INDICATOR_HEIGHT: u16 = 3;

/// Image identifier with value semantics.
///
/// Two tiles show the same picture iff their ids compare equal; the renderer
/// decides what an id looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImageId(pub u8);

impl ImageId {
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A coordinate in board space.
///
/// Signed so that positions left of or above the board survive translation
/// from screen space and simply hit no tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in board space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check if the point lies inside the rectangle.
    ///
    /// The right and bottom edges are exclusive, so neighbouring tiles never
    /// both claim the same point.
    ///
    /// ```
    /// use tui_memory_types::{Point, Rect};
    ///
    /// let r = Rect::new(0, 0, 4, 2);
    /// assert!(r.contains(Point::new(3, 1)));
    /// assert!(!r.contains(Point::new(4, 1)));
    /// assert!(!r.contains(Point::new(-1, 0)));
    /// ```
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Centre cell (rounded towards the top-left)
    pub fn center(&self) -> Point {
        Point::new(
            self.x + (self.width / 2) as i32,
            self.y + (self.height / 2) as i32,
        )
    }
}

/// Turn state of the controller.
///
/// The cycle goes: Idle → OneSelected → Evaluating → Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnPhase {
    /// No tile revealed this turn
    #[default]
    Idle,
    /// One tile revealed, waiting for the second
    OneSelected,
    /// Two tiles revealed, delay running, selections ignored
    Evaluating,
}

impl TurnPhase {
    /// Number of pending tiles in this phase
    pub fn pending_len(&self) -> usize {
        match self {
            TurnPhase::Idle => 0,
            TurnPhase::OneSelected => 1,
            TurnPhase::Evaluating => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TurnPhase::Idle => "idle",
            TurnPhase::OneSelected => "oneSelected",
            TurnPhase::Evaluating => "evaluating",
        }
    }
}

/// Indicator shown next to the board.
///
/// - **Idle**: green, the player may pick tiles
/// - **Evaluating**: red, a pair is being checked and clicks are ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Indicator {
    #[default]
    Idle,
    Evaluating,
}

impl Indicator {
    pub fn color_name(&self) -> &'static str {
        match self {
            Indicator::Idle => "green",
            Indicator::Evaluating => "red",
        }
    }
}

/// Actions consumed by the game session.
///
/// These come from the input layer (mouse, keyboard cursor) and are the only
/// way the outside world changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameAction {
    /// Reveal the tile under this board coordinate
    Select(Point),
    /// Shuffle a fresh board and start over
    Restart,
    /// Leave the play loop
    Close,
}

impl GameAction {
    /// Parse a coordinate-free action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("CLOSE"), Some(GameAction::Close));
    /// assert_eq!(GameAction::from_str("select"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "restart" => Some(GameAction::Restart),
            "close" => Some(GameAction::Close),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Select(_) => "select",
            GameAction::Restart => "restart",
            GameAction::Close => "close",
        }
    }
}
