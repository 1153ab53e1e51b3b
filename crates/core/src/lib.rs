//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the memory game: the tile grid, the image
//! deal and the turn state machine. It has **zero dependencies** on UI, input
//! or timing sources, making it:
//!
//! - **Deterministic**: Same seed deals the same board
//! - **Testable**: Every transition can be driven frame by frame
//! - **Portable**: Any front end that can report clicks and draw rectangles can host it
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile grid, hit testing and the image deal
//! - [`controller`]: Reveal / evaluate / reset turn state machine
//! - [`session`]: One play-through: board, controller, clock and lifecycle flags
//! - [`pairing`]: Which image completes which
//! - [`rng`]: Seeded shuffling
//! - [`snapshot`]: Per-frame data handed to renderers
//!
//! # Game Rules
//!
//! - Sixteen face-down tiles hide eight pairs
//! - Each turn reveals two tiles; they stay up for 30 frames
//! - A matching pair stays revealed, anything else flips back
//! - Clicks during those 30 frames are ignored
//! - The game ends when all sixteen tiles are revealed
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameConfig, GameSession};
//! use tui_memory_types::{GameAction, ImageId, TurnPhase, PAIR_COUNT};
//!
//! let images: Vec<ImageId> = (1..=PAIR_COUNT as u8).map(ImageId::new).collect();
//! let mut game = GameSession::new(GameConfig::default(), &images).expect("valid setup");
//!
//! // Click the top-left tile.
//! let p = game.board().tile(0).unwrap().rect().center();
//! game.apply_action(GameAction::Select(p));
//! game.update(16);
//!
//! assert_eq!(game.phase(), TurnPhase::OneSelected);
//! ```

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod pairing;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod tile;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use controller::{GameController, SelectionState, TurnOutcome};
pub use error::ConfigurationError;
pub use pairing::{deck_from_images, ImagePairing};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snapshot::{SessionSnapshot, TileSnapshot};
pub use tile::Tile;
