//! GameView: maps a `core::SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board space maps 1:1 onto terminal cells: a tile rect of 10x5 covers ten
//! columns and five rows, offset by the layout origin. The side panel sits
//! where the snapshot's indicator rect says, so it shares that offset.

use crate::core::{SessionSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::TilePalette;
use crate::types::{Indicator, Rect};

/// Width reserved right of the indicator column for panel text
const PANEL_TEXT_WIDTH: u16 = 14;

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Keyboard cursor position to highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorView {
    pub row: u8,
    pub col: u8,
}

/// Where the board lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Screen cell of board-space (0, 0)
    pub origin: (u16, u16),
    /// Total width of board plus side panel
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the memory game.
pub struct GameView {
    palette: TilePalette,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(TilePalette::default())
    }
}

impl GameView {
    pub fn new(palette: TilePalette) -> Self {
        Self {
            palette,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn palette(&self) -> &TilePalette {
        &self.palette
    }

    /// Compute where the board goes for this viewport.
    ///
    /// The input layer needs the origin to turn mouse cells into board space.
    pub fn layout(&self, snap: &SessionSnapshot, viewport: Viewport) -> BoardLayout {
        let (board_w, board_h) = snap.board_extent();
        let panel_right = snap.indicator_rect.x.max(board_w) + PANEL_TEXT_WIDTH as i32;
        let width = clamp_u16(panel_right.max(snap.indicator_rect.right()));
        let height = clamp_u16(board_h.max(snap.indicator_rect.bottom()));

        let x = viewport.width.saturating_sub(width) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(height) / 2,
            AnchorY::Top => 0,
        };

        BoardLayout {
            origin: (x, y),
            width,
            height,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_cursor(snap, None, viewport, fb);
    }

    pub fn render_into_with_cursor(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<CursorView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).into_cell(' '));

        let layout = self.layout(snap, viewport);
        let cursor_index = cursor
            .filter(|c| c.row < snap.rows && c.col < snap.cols)
            .map(|c| c.row as usize * snap.cols as usize + c.col as usize);

        for (index, tile) in snap.tiles.iter().enumerate() {
            let frame = if snap.is_pending(index) {
                TileFrame::Pending
            } else if cursor_index == Some(index) && !snap.finished {
                TileFrame::Cursor
            } else {
                TileFrame::Plain
            };
            self.draw_tile(fb, layout.origin, tile, frame);
        }

        self.draw_side_panel(fb, snap, layout.origin, viewport);

        if snap.finished {
            self.draw_solved_overlay(fb, snap, layout.origin);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_with_cursor(
        &self,
        snap: &SessionSnapshot,
        cursor: Option<CursorView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_cursor(snap, cursor, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, origin: (u16, u16), tile: &TileSnapshot, frame: TileFrame) {
        let Some((x, y, w, h)) = to_screen(origin, tile.rect) else {
            return;
        };

        let (ch, fill, glyph) = match tile.image.filter(|_| tile.revealed) {
            Some(image) => match self.palette.art(image) {
                Some(art) => (' ', CellStyle::new(art.fg, art.bg), Some((art.glyph, art.fg, art.bg))),
                None => ('?', CellStyle::default(), None),
            },
            None => {
                let back = self.palette.back();
                (back.glyph, CellStyle::new(back.fg, back.bg).dim(), None)
            }
        };

        if w < 3 || h < 3 {
            let ch = glyph.map(|(g, _, _)| g).unwrap_or(ch);
            fb.fill_rect(x, y, w, h, ch, fill);
            return;
        }

        fb.fill_rect(x.saturating_add(1), y.saturating_add(1), w - 2, h - 2, ch, fill);
        if let Some((g, fg, bg)) = glyph {
            let style = CellStyle::new(fg, bg).bold();
            fb.put_char(x.saturating_add(w / 2), y.saturating_add(h / 2), g, style);
        }

        let border = match frame {
            TileFrame::Plain => CellStyle::new(Rgb::new(120, 120, 130), SCREEN_BG),
            TileFrame::Cursor => CellStyle::new(Rgb::new(240, 220, 80), SCREEN_BG).bold(),
            TileFrame::Pending => CellStyle::new(Rgb::new(230, 70, 70), SCREEN_BG).bold(),
        };
        fb.draw_box(x, y, w, h, border);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        origin: (u16, u16),
        viewport: Viewport,
    ) {
        let Some((panel_x, indicator_y, ind_w, ind_h)) = to_screen(origin, snap.indicator_rect) else {
            return;
        };
        if panel_x >= viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let dim = value.dim();

        // Elapsed time above the indicator.
        let top = origin.1;
        fb.put_str(panel_x, top, "TIME", label);
        let n = fb.put_u64(panel_x, top.saturating_add(1), snap.elapsed_secs, value);
        fb.put_char(panel_x.saturating_add(n), top.saturating_add(1), 's', value);

        // Indicator.
        let (color, text) = match snap.indicator {
            Indicator::Idle => (Rgb::new(60, 200, 90), "READY"),
            Indicator::Evaluating => (Rgb::new(220, 60, 60), "WAIT"),
        };
        let ind_style = CellStyle::new(Rgb::new(0, 0, 0), color).bold();
        fb.fill_rect(panel_x, indicator_y, ind_w, ind_h, ' ', ind_style);
        let text_w = text.chars().count() as u16;
        fb.put_str(
            panel_x.saturating_add(ind_w.saturating_sub(text_w) / 2),
            indicator_y.saturating_add(ind_h / 2),
            text,
            ind_style,
        );

        // Progress.
        let mut y = indicator_y.saturating_add(ind_h).saturating_add(1);
        fb.put_str(panel_x, y, "PAIRS", label);
        y = y.saturating_add(1);
        let total_pairs = (snap.tiles.len() / 2) as u64;
        let n = fb.put_u64(panel_x, y, (snap.matched_tiles / 2) as u64, value);
        fb.put_char(panel_x.saturating_add(n), y, '/', value);
        fb.put_u64(panel_x.saturating_add(n + 1), y, total_pairs, value);
        y = y.saturating_add(2);

        if y.saturating_add(3) < viewport.height {
            fb.put_str(panel_x, y, "click/enter flip", dim);
            fb.put_str(panel_x, y.saturating_add(1), "r restart", dim);
            fb.put_str(panel_x, y.saturating_add(2), "q quit", dim);
        }
    }

    fn draw_solved_overlay(&self, fb: &mut FrameBuffer, snap: &SessionSnapshot, origin: (u16, u16)) {
        let (board_w, board_h) = snap.board_extent();
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

        let mid_y = origin.1.saturating_add(clamp_u16(board_h) / 2);
        let text = "SOLVED";
        let text_w = text.chars().count() as u16;
        let x = origin.0.saturating_add(clamp_u16(board_w).saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, style);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileFrame {
    Plain,
    Cursor,
    Pending,
}

/// Map a board-space rect to screen cells; None if it starts off-screen.
fn to_screen(origin: (u16, u16), rect: Rect) -> Option<(u16, u16, u16, u16)> {
    let x = origin.0 as i32 + rect.x;
    let y = origin.1 as i32 + rect.y;
    if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
        return None;
    }
    Some((x as u16, y as u16, rect.width, rect.height))
}

fn clamp_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}
