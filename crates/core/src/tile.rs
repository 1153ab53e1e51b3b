//! Tile module - a single face-down/face-up cell of the board

use crate::types::{ImageId, Point, Rect};

/// One grid cell.
///
/// Geometry is fixed at board construction, the image is dealt once, and only
/// the controller flips `hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    rect: Rect,
    hidden: bool,
    image: Option<ImageId>,
}

impl Tile {
    /// Create a hidden tile with no image yet
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            hidden: true,
            image: None,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_revealed(&self) -> bool {
        !self.hidden
    }

    pub fn image(&self) -> Option<ImageId> {
        self.image
    }

    /// Check if a point selects this tile
    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }

    pub(crate) fn set_image(&mut self, image: ImageId) {
        self.image = Some(image);
    }

    pub(crate) fn reveal(&mut self) {
        self.hidden = false;
    }

    pub(crate) fn hide(&mut self) {
        self.hidden = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tile_is_hidden_without_image() {
        let tile = Tile::new(Rect::new(0, 0, 10, 5));
        assert!(tile.is_hidden());
        assert_eq!(tile.image(), None);
    }

    #[test]
    fn reveal_and_hide_toggle_visibility() {
        let mut tile = Tile::new(Rect::new(0, 0, 10, 5));
        tile.set_image(ImageId(3));
        tile.reveal();
        assert!(tile.is_revealed());
        tile.hide();
        assert!(tile.is_hidden());
        assert_eq!(tile.image(), Some(ImageId(3)));
    }
}
