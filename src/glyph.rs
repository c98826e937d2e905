//! Constant 5×5 bitmaps for the digits 0–9.
//!
//! Cells are numbered row-major: cell `y * 5 + x` is column `x` of row `y`,
//! with `(0, 0)` at the top-left. This is the logical order; the order the LEDs
//! are wired in is handled separately by [`layout`](crate::layout).

use crate::digit::Digit;

/// Columns in a glyph.
pub const GLYPH_WIDTH: usize = 5;
/// Rows in a glyph.
pub const GLYPH_HEIGHT: usize = 5;
/// Cells in a glyph.
pub const GLYPH_CELLS: usize = GLYPH_WIDTH * GLYPH_HEIGHT;

/// On/off bitmap for one digit, packed so bit `i` is cell `i`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, defmt::Format)]
pub struct Glyph(u32);

impl Glyph {
    /// Builds a glyph from five rows, top row first.
    ///
    /// Each row is written as it looks: the most significant of the five low
    /// bits is the leftmost column, so `0b01110` lights the middle three.
    #[must_use]
    pub const fn from_rows(rows: [u8; GLYPH_HEIGHT]) -> Self {
        let mut bits = 0_u32;
        let mut y_index = 0;
        while y_index < GLYPH_HEIGHT {
            let row = rows[y_index];
            assert!(row < (1 << GLYPH_WIDTH), "glyph row has more than 5 columns");
            let mut x_index = 0;
            while x_index < GLYPH_WIDTH {
                if row & (1 << (GLYPH_WIDTH - 1 - x_index)) != 0 {
                    bits |= 1 << (y_index * GLYPH_WIDTH + x_index);
                }
                x_index += 1;
            }
            y_index += 1;
        }
        Self(bits)
    }

    /// Whether cell `cell_index` is lit. Cells past the last one are never lit.
    #[must_use]
    pub const fn is_set(self, cell_index: usize) -> bool {
        cell_index < GLYPH_CELLS && self.0 & (1 << cell_index) != 0
    }

    /// Whether column `x_index` of row `y_index` is lit.
    #[must_use]
    pub const fn is_set_xy(self, x_index: usize, y_index: usize) -> bool {
        x_index < GLYPH_WIDTH && y_index < GLYPH_HEIGHT && self.is_set(y_index * GLYPH_WIDTH + x_index)
    }

    /// All 25 cells in row-major order.
    pub fn cells(self) -> impl Iterator<Item = bool> {
        (0..GLYPH_CELLS).map(move |cell_index| self.is_set(cell_index))
    }

    /// Number of lit cells.
    #[must_use]
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    /// The packed bits (bit `i` is cell `i`).
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

/// The glyph for each digit, indexed by the digit's value.
pub const GLYPHS: [Glyph; 10] = [
    Glyph::from_rows([0b01110, 0b01010, 0b01010, 0b01010, 0b01110]), // 0
    Glyph::from_rows([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]), // 1
    Glyph::from_rows([0b01110, 0b00010, 0b01110, 0b01000, 0b01110]), // 2
    Glyph::from_rows([0b01110, 0b00010, 0b00110, 0b00010, 0b01110]), // 3
    Glyph::from_rows([0b01010, 0b01010, 0b01110, 0b00010, 0b00010]), // 4
    Glyph::from_rows([0b01110, 0b01000, 0b01110, 0b00010, 0b01110]), // 5
    Glyph::from_rows([0b01110, 0b01000, 0b01110, 0b01010, 0b01110]), // 6
    Glyph::from_rows([0b01110, 0b00010, 0b00010, 0b00010, 0b00010]), // 7
    Glyph::from_rows([0b01110, 0b01010, 0b01110, 0b01010, 0b01110]), // 8
    Glyph::from_rows([0b01110, 0b01010, 0b01110, 0b00010, 0b01110]), // 9
];

/// Returns the glyph for `digit`.
#[must_use]
pub const fn lookup(digit: Digit) -> Glyph {
    GLYPHS[digit.get() as usize]
}
