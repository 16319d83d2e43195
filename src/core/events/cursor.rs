//=========================================================================
// Cursor State
//=========================================================================
//
// The fixed set of pointer images and their hotspots.
//
// Images are built once from ASCII art when the dispatcher is built and
// never change afterwards. Rendering reads the active image; nothing in
// here pushes to the screen.
//
// Art legend:
//   '.'  transparent
//   '#'  outline (black)
//   'o'  fill (white)
//
//=========================================================================

//=== External Crates =====================================================

use thiserror::Error;

//=== CursorId ============================================================

/// Available cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CursorId {
    None = 0,
    #[default]
    Arrow = 1,
    IBeam = 2,
    Hand = 3,
}

impl CursorId {
    pub const ALL: [CursorId; 4] = [Self::None, Self::Arrow, Self::IBeam, Self::Hand];

    fn index(self) -> usize {
        self as usize
    }
}

//=== CursorError =========================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor row {row} is {found} pixels wide, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("unknown cursor glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },

    #[error("hotspot ({x}, {y}) lies outside a {width}x{height} cursor")]
    HotspotOutOfBounds { x: u16, y: u16, width: u16, height: u16 },
}

//=== CursorPixel =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorPixel {
    Transparent,
    Outline,
    Fill,
}

impl CursorPixel {
    fn rgba(self) -> [u8; 4] {
        match self {
            Self::Transparent => [0, 0, 0, 0],
            Self::Outline => [0, 0, 0, 0xff],
            Self::Fill => [0xff, 0xff, 0xff, 0xff],
        }
    }
}

//=== CursorImage =========================================================

/// Immutable cursor bitmap with its hotspot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorImage {
    width: u16,
    height: u16,
    hotspot: (u16, u16),
    pixels: Vec<CursorPixel>,
}

impl CursorImage {
    /// An image with no pixels (hidden cursor).
    pub fn empty() -> Self {
        Self { width: 0, height: 0, hotspot: (0, 0), pixels: Vec::new() }
    }

    /// Builds an image from rows of ASCII art.
    pub fn from_art(rows: &[&str], hotspot: (u16, u16)) -> Result<Self, CursorError> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut pixels = Vec::with_capacity(width * rows.len());

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(CursorError::RaggedRow { row: y, expected: width, found });
            }
            for (x, glyph) in row.chars().enumerate() {
                pixels.push(match glyph {
                    '.' => CursorPixel::Transparent,
                    '#' => CursorPixel::Outline,
                    'o' => CursorPixel::Fill,
                    _ => return Err(CursorError::UnknownGlyph { glyph, x, y }),
                });
            }
        }

        let (width, height) = (width as u16, rows.len() as u16);
        if hotspot.0 >= width || hotspot.1 >= height {
            return Err(CursorError::HotspotOutOfBounds {
                x: hotspot.0,
                y: hotspot.1,
                width,
                height,
            });
        }

        Ok(Self { width, height, hotspot, pixels })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn hotspot(&self) -> (u16, u16) {
        self.hotspot
    }

    pub fn pixel(&self, x: u16, y: u16) -> Option<CursorPixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(usize::from(y) * usize::from(self.width) + usize::from(x)).copied()
    }

    /// Expands the image to straight RGBA8.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.rgba()).collect()
    }
}

//=== Built-in Art ========================================================

const ARROW: [&str; 13] = [
    "#.......",
    "##......",
    "#o#.....",
    "#oo#....",
    "#ooo#...",
    "#oooo#..",
    "#ooooo#.",
    "#oooooo#",
    "#oooo###",
    "#o#oo#..",
    "##.#oo#.",
    "....#oo#",
    ".....##.",
];

const IBEAM: [&str; 13] = [
    "##.##",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "..#..",
    "##.##",
];

const HAND: [&str; 14] = [
    "...##.......",
    "..#oo#......",
    "..#oo#......",
    "..#oo###....",
    "..#oo#oo##..",
    "..#oo#oo#o#.",
    "###oooooooo#",
    "#o#oooooooo#",
    "#oooooooooo#",
    ".#ooooooooo#",
    "..#oooooooo#",
    "...#oooooo#.",
    "....#ooooo#.",
    "....#######.",
];

//=== CursorSet ===========================================================

/// The four cursor images indexed by [`CursorId`].
#[derive(Debug, Clone)]
pub struct CursorSet {
    images: [CursorImage; 4],
}

impl CursorSet {
    /// Builds the default arrow, I-beam and hand cursors.
    pub fn builtin() -> Result<Self, CursorError> {
        Ok(Self {
            images: [
                CursorImage::empty(),
                CursorImage::from_art(&ARROW, (0, 0))?,
                CursorImage::from_art(&IBEAM, (2, 6))?,
                CursorImage::from_art(&HAND, (3, 0))?,
            ],
        })
    }

    /// Assembles a set from caller-supplied images.
    pub fn from_images(arrow: CursorImage, ibeam: CursorImage, hand: CursorImage) -> Self {
        Self { images: [CursorImage::empty(), arrow, ibeam, hand] }
    }

    pub fn get(&self, id: CursorId) -> &CursorImage {
        &self.images[id.index()]
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
