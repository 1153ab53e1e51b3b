//! Terminal front end for the memory game.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! [`GameView`] paints a [`SessionSnapshot`](crate::core::SessionSnapshot)
//! into a [`FrameBuffer`], and [`TerminalRenderer`] flushes only the cells
//! that changed since the previous frame.
//!
//! Board space maps one-to-one onto terminal cells, so a tile that is
//! `10x5` in the game core covers ten columns and five rows on screen.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, CursorView, GameView, Viewport};
pub use palette::{TileArt, TilePalette};
pub use renderer::{encode_enter_into, encode_exit_into, encode_frame_into, TerminalRenderer};
