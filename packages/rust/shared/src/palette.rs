//! Fixed color palette and the rotating selectors that hand colors out.

use std::fmt;

/// A 24-bit RGB color, e.g. `0xFF1493`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(pub u32);

impl Color {
    /// Raw `0xRRGGBB` value.
    pub fn rgb(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Band colors. Adjacent entries are hard to tell apart, which is why the
/// cyclers step through it three at a time.
pub const PALETTE: [Color; 8] = [
    Color(0xFF1493), // deeppink
    Color(0xFFE4E1), // mistyrose
    Color(0xE6E6FA), // lavender
    Color(0x7FFFD4), // aquamarine
    Color(0xADFF2F), // greenyellow
    Color(0xFFFFE0), // lightyellow
    Color(0xFFD700), // gold
    Color(0xFF7F50), // coral
];

const STRIDE: usize = 3;
const BOOK_OFFSET: usize = 0;
const CHAPTER_OFFSET: usize = 1;

/// Endless round-robin over a palette, starting at `offset` and advancing
/// `stride` entries per step (wrapping).
#[derive(Debug, Clone)]
pub struct ColorCycler {
    palette: &'static [Color],
    position: usize,
    stride: usize,
}

impl ColorCycler {
    /// Build a cycler over `palette`.
    ///
    /// # Panics
    ///
    /// Panics if `palette` is empty or `stride` is zero.
    pub fn new(palette: &'static [Color], offset: usize, stride: usize) -> Self {
        assert!(!palette.is_empty(), "palette must not be empty");
        assert!(stride > 0, "stride must be positive");
        Self {
            palette,
            position: offset % palette.len(),
            stride,
        }
    }

    /// Selector used for book bands.
    pub fn books() -> Self {
        Self::new(&PALETTE, BOOK_OFFSET, STRIDE)
    }

    /// Selector used for chapter bands.
    pub fn chapters() -> Self {
        Self::new(&PALETTE, CHAPTER_OFFSET, STRIDE)
    }

    /// Return the current color and advance by one stride.
    pub fn next_color(&mut self) -> Color {
        let color = self.palette[self.position];
        self.position = (self.position + self.stride) % self.palette.len();
        color
    }
}

impl Iterator for ColorCycler {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        Some(self.next_color())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
