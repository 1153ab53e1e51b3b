//! Board module - owns the tile grid and the image deal
//!
//! The board is a rows x cols grid of equally sized tiles stored flat in
//! row-major order (`row * cols + col`). Tile geometry is in board space:
//! the tile at (row, col) covers `[col * w, (col + 1) * w) x [row * h, (row + 1) * h)`.
//! Tiles are referenced by their flat index.

use std::collections::BTreeMap;

use crate::error::{ConfigurationError, Result};
use crate::pairing::ImagePairing;
use crate::rng::SimpleRng;
use crate::tile::Tile;
use crate::types::{ImageId, Point, Rect, BOARD_COLS, BOARD_ROWS, TILE_HEIGHT, TILE_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    cell_width: u16,
    cell_height: u16,
    /// Flat array of tiles, row-major order
    tiles: Vec<Tile>,
    pairing: ImagePairing,
}

impl Board {
    /// Create a 4x4 board with the default tile size
    pub fn new() -> Self {
        Self::build(BOARD_ROWS, BOARD_COLS, TILE_WIDTH, TILE_HEIGHT)
    }

    /// Create `rows * cols` hidden tiles at their grid positions, no images yet
    pub fn build(rows: u8, cols: u8, cell_width: u16, cell_height: u16) -> Self {
        let mut tiles = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows as i32 {
            for col in 0..cols as i32 {
                let rect = Rect::new(
                    col * cell_width as i32,
                    row * cell_height as i32,
                    cell_width,
                    cell_height,
                );
                tiles.push(Tile::new(rect));
            }
        }

        Self {
            rows,
            cols,
            cell_width,
            cell_height,
            tiles,
            pairing: ImagePairing::default(),
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: u8, col: u8) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn cell_width(&self) -> u16 {
        self.cell_width
    }

    pub fn cell_height(&self) -> u16 {
        self.cell_height
    }

    /// Board width in board-space units
    pub fn width(&self) -> u16 {
        self.cell_width.saturating_mul(self.cols as u16)
    }

    /// Board height in board-space units
    pub fn height(&self) -> u16 {
        self.cell_height.saturating_mul(self.rows as u16)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    pub(crate) fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// (row, col) of a flat index
    pub fn position(&self, index: usize) -> Option<(u8, u8)> {
        if index >= self.tiles.len() || self.cols == 0 {
            return None;
        }
        let cols = self.cols as usize;
        Some(((index / cols) as u8, (index % cols) as u8))
    }

    /// Index of the tile whose rectangle contains `p`, if any
    pub fn tile_at(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || self.cell_width == 0 || self.cell_height == 0 {
            return None;
        }
        let col = p.x / self.cell_width as i32;
        let row = p.y / self.cell_height as i32;
        if col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        let index = self.index(row as u8, col as u8)?;
        debug_assert!(self.tiles[index].contains(p));
        Some(index)
    }

    pub fn pairing(&self) -> &ImagePairing {
        &self.pairing
    }

    /// Number of face-down tiles
    pub fn hidden_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_hidden()).count()
    }

    /// Shuffle `deck` and deal one image per tile in grid order.
    ///
    /// `deck` is the unshuffled sequence: each distinct image exactly twice,
    /// the second half repeating the first. The pairing is built from it
    /// before shuffling. On error the board is left untouched.
    pub fn assign_images(&mut self, deck: Vec<ImageId>, rng: &mut SimpleRng) -> Result<()> {
        let expected = self.tiles.len();
        if deck.len() != expected {
            return Err(ConfigurationError::ImageCountMismatch {
                expected,
                actual: deck.len(),
            });
        }

        let mut counts: BTreeMap<ImageId, usize> = BTreeMap::new();
        for &image in &deck {
            *counts.entry(image).or_default() += 1;
        }
        if let Some((&image, &occurrences)) = counts.iter().find(|(_, &n)| n != 2) {
            return Err(ConfigurationError::UnpairedImage { image, occurrences });
        }

        let pairing = ImagePairing::from_halves(&deck)?;

        let mut deck = deck;
        rng.shuffle(&mut deck);
        for (tile, image) in self.tiles.iter_mut().zip(deck) {
            tile.set_image(image);
        }
        self.pairing = pairing;

        tracing::debug!(
            tiles = expected,
            pairs = counts.len(),
            "dealt images to board"
        );
        Ok(())
    }

    /// Deal a fixed layout without shuffling (for testing)
    #[cfg(test)]
    pub(crate) fn with_layout(mut self, layout: &[ImageId], pairing: ImagePairing) -> Self {
        assert_eq!(layout.len(), self.tiles.len());
        for (tile, &image) in self.tiles.iter_mut().zip(layout) {
            tile.set_image(image);
        }
        self.pairing = pairing;
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
