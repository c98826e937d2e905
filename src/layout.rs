//! Compile-time description of how the matrix LEDs are wired.
//!
//! See [`LedLayout`] and the board constant [`BITDOGLAB_5X5`].

use crate::frame::{Frame, PIXEL_COUNT};
use crate::glyph::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Width of the matrix in LEDs.
pub const MATRIX_WIDTH: usize = GLYPH_WIDTH;
/// Height of the matrix in LEDs.
pub const MATRIX_HEIGHT: usize = GLYPH_HEIGHT;

/// Wiring of the 5×5 matrix on the BitDogLab board.
///
/// LED 0 sits at the bottom-right. The bottom row runs right-to-left, the next
/// row up runs left-to-right, and so on, alternating up to the top row.
///
/// ```text
///   LED24 LED23 LED22 LED21 LED20
///   LED15 LED16 LED17 LED18 LED19
///   LED14 LED13 LED12 LED11 LED10
///   LED5  LED6  LED7  LED8  LED9
///   LED4  LED3  LED2  LED1  LED0
/// ```
pub const BITDOGLAB_5X5: LedLayout<PIXEL_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
    LedLayout::serpentine_row_major().rotate_180();

/// Maps the linear order of LEDs on a strip to `(x, y)` cells of a `W`×`H` panel.
///
/// Entry `i` is the cell lit by LED `i`. Coordinates are screen-style: `(0, 0)` is
/// the top-left, `x` grows to the right and `y` grows downward.
///
/// Frames are rendered in row-major cell order; [`remap`](Self::remap) reorders
/// one into wiring order just before it is sent to the strip.
///
/// Layouts are validated at **compile time** when built in a `const`:
/// coordinates must be in bounds and every cell must appear exactly once.
///
/// ```rust
/// use digit_matrix::layout::LedLayout;
///
/// const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
/// const _: () = assert!(MAP.equals(&EXPECTED));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the layout has no LEDs (never true for a layout built by [`new`](Self::new)).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Const equality helper for compile-time checks.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the mapping covers every cell of the W×H panel exactly once.
    ///
    /// Panics (at compile time, in a `const`) if a coordinate is out of bounds,
    /// repeated, or missing.
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (x_index, y_index) = map[i];
            let x_index = x_index as usize;
            let y_index = y_index as usize;

            assert!(x_index < W, "column out of bounds");
            assert!(y_index < H, "row out of bounds");

            let cell = y_index * W + x_index;
            assert!(!seen[cell], "duplicate (x, y) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Row-major wiring: every row runs left-to-right, top row first.
    ///
    /// Remapping through this layout leaves a frame unchanged.
    ///
    /// ```text
    ///   LED0  LED1  LED2
    ///   LED3  LED4  LED5
    /// ```
    #[must_use]
    pub const fn row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            mapping[led_index] = ((led_index % W) as u16, (led_index / W) as u16);
            led_index += 1;
        }
        Self::new(mapping)
    }

    /// Serpentine row-major wiring (alternating left-to-right and right-to-left across rows).
    ///
    /// ```text
    /// Strip snakes across rows (3×2 example):
    ///   LED0  LED1  LED2
    ///   LED5  LED4  LED3
    /// ```
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 90° clockwise (dims swap).
    ///
    /// ```text
    /// Before (3×2 serpentine): After (2×3):
    ///   LED0  LED1  LED2        LED5  LED0
    ///   LED5  LED4  LED3        LED4  LED1
    ///                           LED3  LED2
    /// ```
    #[must_use]
    pub const fn rotate_cw(self) -> LedLayout<N, H, W> {
        let mut out = [(0_u16, 0_u16); N];
        let mut i = 0;
        while i < N {
            let (x_index, y_index) = self.map[i];
            out[i] = ((H - 1 - y_index as usize) as u16, x_index);
            i += 1;
        }
        LedLayout::<N, H, W>::new(out)
    }

    /// Rotate 180°, derived from two clockwise turns.
    ///
    /// ```text
    /// Before (3×2 serpentine): After 180°:
    ///   LED0  LED1  LED2        LED3  LED4  LED5
    ///   LED5  LED4  LED3        LED2  LED1  LED0
    /// ```
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        self.rotate_cw().rotate_cw()
    }

    /// For each cell in row-major order, the LED wired to it.
    #[must_use]
    pub const fn xy_to_index(&self) -> [u16; N] {
        assert!(
            N <= u16::MAX as usize,
            "total LEDs must fit in u16 for xy_to_index"
        );

        let mut mapping = [0_u16; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            mapping[y_index as usize * W + x_index as usize] = led_index as u16;
            led_index += 1;
        }
        mapping
    }

    /// Reorders a row-major `frame` into wiring order.
    ///
    /// LED `i` of the result takes the color of the cell this layout assigns to LED `i`.
    #[must_use]
    pub fn remap(&self, frame: &Frame<N>) -> Frame<N> {
        let mut strip_frame = Frame::new();
        for (strip_color, &(x_index, y_index)) in strip_frame.iter_mut().zip(self.map.iter()) {
            let cell = usize::from(y_index) * W + usize::from(x_index);
            if let Some(&color) = frame.get(cell) {
                *strip_color = color;
            }
        }
        strip_frame
    }
}
