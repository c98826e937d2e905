#![allow(missing_docs)]
//! Host-level tests for the glyph table and frame rendering.

use digit_matrix::digit::Digit;
use digit_matrix::frame::{OFF_COLOR, ON_COLOR, PIXEL_COUNT, colors, render};
use digit_matrix::glyph::{GLYPH_CELLS, GLYPHS, Glyph, lookup};

#[test]
fn on_color_is_pure_blue_and_off_is_black() {
    assert_eq!((ON_COLOR.r, ON_COLOR.g, ON_COLOR.b), (0, 0, 255));
    assert_eq!((OFF_COLOR.r, OFF_COLOR.g, OFF_COLOR.b), (0, 0, 0));
    assert_eq!(ON_COLOR, colors::BLUE);
}

#[test]
fn render_matches_glyph_cell_for_cell() {
    for digit in Digit::all() {
        let glyph = lookup(digit);
        let frame = render(glyph);
        assert_eq!(frame.len(), PIXEL_COUNT);
        for (cell_index, &color) in frame.iter().enumerate() {
            let expected = if glyph.is_set(cell_index) {
                ON_COLOR
            } else {
                OFF_COLOR
            };
            assert_eq!(color, expected, "digit {digit}, cell {cell_index}");
        }
        assert_eq!(frame.lit_count(), glyph.lit_count() as usize);
    }
}

#[test]
fn glyphs_are_distinct() {
    for (left_index, left) in GLYPHS.iter().enumerate() {
        for right in &GLYPHS[left_index + 1..] {
            assert_ne!(left, right);
        }
    }
}

#[test]
fn glyphs_use_only_25_cells() {
    for glyph in GLYPHS {
        assert_eq!(glyph.bits() >> GLYPH_CELLS, 0);
        assert_eq!(glyph.cells().count(), GLYPH_CELLS);
    }
}

#[test]
fn digit_glyph_is_table_entry() {
    for digit in Digit::all() {
        assert_eq!(digit.glyph(), GLYPHS[usize::from(digit.get())]);
    }
}

#[test]
fn one_is_drawn_upright() {
    let one = Digit::new(1).expect("in range").glyph();
    // Flag at the top-left, base along the bottom.
    assert!(one.is_set_xy(2, 0));
    assert!(one.is_set_xy(1, 1));
    assert!(!one.is_set_xy(1, 0));
    for x_index in 1..=3 {
        assert!(one.is_set_xy(x_index, 4));
    }
}

#[test]
fn from_rows_reads_most_significant_bit_as_left() {
    let glyph = Glyph::from_rows([0b10000, 0, 0, 0, 0b00001]);
    assert!(glyph.is_set_xy(0, 0));
    assert!(glyph.is_set_xy(4, 4));
    assert_eq!(glyph.lit_count(), 2);
    assert!(!glyph.is_set(GLYPH_CELLS));
    assert!(!glyph.is_set_xy(5, 0));
}
