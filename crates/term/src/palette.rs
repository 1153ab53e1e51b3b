//! Tile artwork for the terminal.
//!
//! The game core only knows opaque [`ImageId`]s; this palette is where an id
//! gets a face. It hands out the ids for a new board and supplies the back
//! design shown on hidden tiles.

use crate::core::ConfigurationError;
use crate::fb::Rgb;
use crate::types::ImageId;

/// How one image is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileArt {
    pub glyph: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl TileArt {
    pub const fn new(glyph: char, fg: Rgb, bg: Rgb) -> Self {
        Self { glyph, fg, bg }
    }
}

const FACES: [TileArt; 10] = [
    TileArt::new('♠', Rgb::new(230, 230, 240), Rgb::new(40, 40, 60)),
    TileArt::new('♥', Rgb::new(240, 80, 90), Rgb::new(70, 20, 30)),
    TileArt::new('♦', Rgb::new(255, 165, 0), Rgb::new(70, 40, 10)),
    TileArt::new('♣', Rgb::new(100, 220, 120), Rgb::new(20, 60, 30)),
    TileArt::new('★', Rgb::new(240, 220, 80), Rgb::new(60, 55, 10)),
    TileArt::new('●', Rgb::new(80, 220, 220), Rgb::new(10, 55, 60)),
    TileArt::new('▲', Rgb::new(200, 120, 220), Rgb::new(50, 25, 60)),
    TileArt::new('■', Rgb::new(80, 120, 220), Rgb::new(15, 30, 70)),
    TileArt::new('✿', Rgb::new(255, 150, 200), Rgb::new(70, 30, 50)),
    TileArt::new('☾', Rgb::new(180, 180, 255), Rgb::new(25, 25, 70)),
];

const BACK: TileArt = TileArt::new('░', Rgb::new(90, 110, 170), Rgb::new(25, 30, 60));

#[derive(Debug, Clone)]
pub struct TilePalette {
    faces: Vec<TileArt>,
    back: TileArt,
}

impl TilePalette {
    pub fn new(faces: Vec<TileArt>, back: TileArt) -> Self {
        Self { faces, back }
    }

    /// Number of distinct images available
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Hand out `count` distinct image ids.
    pub fn image_ids(&self, count: usize) -> Result<Vec<ImageId>, ConfigurationError> {
        if count > self.faces.len() || count > u8::MAX as usize + 1 {
            return Err(ConfigurationError::NotEnoughImages {
                expected: count,
                actual: self.faces.len(),
            });
        }
        Ok((0..count).map(|i| ImageId(i as u8)).collect())
    }

    pub fn art(&self, image: ImageId) -> Option<&TileArt> {
        self.faces.get(image.get() as usize)
    }

    /// Back design for face-down tiles
    pub fn back(&self) -> &TileArt {
        &self.back
    }
}

impl Default for TilePalette {
    fn default() -> Self {
        Self::new(FACES.to_vec(), BACK)
    }
}
