//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::GameAction`]s. Mouse clicks
//! become selections directly; for terminals without mouse reporting a
//! keyboard cursor walks the grid and selects the tile under it.

pub mod cursor;
pub mod handler;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::CursorState;
pub use handler::InputHandler;
pub use map::{handle_key_event, mouse_selection, should_quit, KeyIntent};
