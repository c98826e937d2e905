//! Pixel frames and rendering glyphs into them.
//!
//! See [`render`] for the glyph-to-frame conversion.

use core::ops::{Deref, DerefMut};

use crate::glyph::{GLYPH_CELLS, Glyph};

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = smart_leds::RGB8;

/// Color of a lit cell (pure blue).
pub const ON_COLOR: Rgb = colors::BLUE;

/// Color of an unlit cell.
pub const OFF_COLOR: Rgb = colors::BLACK;

/// Number of LEDs in the matrix.
pub const PIXEL_COUNT: usize = GLYPH_CELLS;

/// [`Rgb`] pixel data for `N` LEDs, in order.
///
/// Frames deref to `[Rgb; N]`, so pixels can be read and written directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame<const N: usize>(pub [Rgb; N]);

/// A frame covering the whole 5×5 matrix.
pub type PixelFrame = Frame<PIXEL_COUNT>;

impl<const N: usize> Frame<N> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([OFF_COLOR; N])
    }

    /// Number of pixels that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|&&color| color != OFF_COLOR).count()
    }
}

impl<const N: usize> Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame<N>> for [Rgb; N] {
    fn from(frame: Frame<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `glyph` into a frame in glyph cell order.
///
/// Cell `i` becomes [`ON_COLOR`] if it is set, otherwise [`OFF_COLOR`].
///
/// ```rust
/// use digit_matrix::digit::Digit;
/// use digit_matrix::frame::{ON_COLOR, OFF_COLOR, render};
///
/// let frame = render(Digit::ZERO.glyph());
/// assert_eq!(frame[0], OFF_COLOR); // top-left corner is dark
/// assert_eq!(frame[1], ON_COLOR);
/// ```
#[must_use]
pub fn render(glyph: Glyph) -> PixelFrame {
    Frame(core::array::from_fn(|cell_index| {
        if glyph.is_set(cell_index) {
            ON_COLOR
        } else {
            OFF_COLOR
        }
    }))
}
