#![allow(missing_docs)]
//! Host-level tests for the wiring layouts and the frame remap.

use digit_matrix::digit::Digit;
use digit_matrix::frame::{Frame, OFF_COLOR, ON_COLOR, PIXEL_COUNT, render};
use digit_matrix::layout::{BITDOGLAB_5X5, LedLayout, MATRIX_HEIGHT, MATRIX_WIDTH};

// What each BitDogLab LED shows for each digit, in wiring order (LED0 first).
const PHYSICAL: [[u8; PIXEL_COUNT]; 10] = [
    [0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 0],
    [0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 1, 0],
    [0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0, 0, 0, 0, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 1, 0, 0, 1, 1, 1, 0],
];

type Matrix = LedLayout<PIXEL_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT>;

#[test]
fn row_major_3x2_matches_expected() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::row_major();
    assert_eq!(
        *MAP.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
    );
}

#[test]
fn serpentine_row_major_3x2_matches_expected() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        *MAP.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]
    );
}

#[test]
fn rotate_cw_swaps_dimensions() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    const ROTATED: LedLayout<6, 2, 3> = MAP.rotate_cw();
    assert_eq!(ROTATED.width(), 2);
    assert_eq!(ROTATED.height(), 3);
    assert_eq!(
        *ROTATED.index_to_xy(),
        [(1, 0), (1, 1), (1, 2), (0, 2), (0, 1), (0, 0)]
    );
}

#[test]
fn rotate_180_twice_is_identity() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert!(MAP.rotate_180().rotate_180().equals(&MAP));
}

#[test]
fn rotate_180_3x2_matches_expected() {
    const MAP: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        *MAP.rotate_180().index_to_xy(),
        [(2, 1), (1, 1), (0, 1), (0, 0), (1, 0), (2, 0)]
    );
}

#[test]
fn xy_to_index_inverts_index_to_xy() {
    let xy_to_index = BITDOGLAB_5X5.xy_to_index();
    for (led_index, &(x_index, y_index)) in BITDOGLAB_5X5.index_to_xy().iter().enumerate() {
        let cell = usize::from(y_index) * MATRIX_WIDTH + usize::from(x_index);
        assert_eq!(usize::from(xy_to_index[cell]), led_index);
    }
}

#[test]
fn bitdoglab_corners() {
    let index_to_xy = BITDOGLAB_5X5.index_to_xy();
    // LED0 bottom-right, LED4 bottom-left, LED5 one up on the left, LED24 top-left.
    assert_eq!(index_to_xy[0], (4, 4));
    assert_eq!(index_to_xy[4], (0, 4));
    assert_eq!(index_to_xy[5], (0, 3));
    assert_eq!(index_to_xy[20], (4, 0));
    assert_eq!(index_to_xy[24], (0, 0));
}

#[test]
fn bitdoglab_remap_matches_physical_wiring() {
    for digit in Digit::all() {
        let strip_frame = BITDOGLAB_5X5.remap(&render(digit.glyph()));
        let expected = PHYSICAL[usize::from(digit.get())];
        for (led_index, (&color, &lit)) in strip_frame.iter().zip(expected.iter()).enumerate() {
            let expected_color = if lit == 1 { ON_COLOR } else { OFF_COLOR };
            assert_eq!(color, expected_color, "digit {digit}, LED {led_index}");
        }
    }
}

#[test]
fn row_major_remap_is_identity() {
    const ROW_MAJOR: Matrix = LedLayout::row_major();
    for digit in Digit::all() {
        let frame = render(digit.glyph());
        assert_eq!(ROW_MAJOR.remap(&frame), frame);
    }
}

#[test]
fn remap_is_a_permutation() {
    let mut frame = Frame::<PIXEL_COUNT>::new();
    for (color, cell_value) in frame.iter_mut().zip(0_u8..) {
        color.r = cell_value;
    }
    let strip_frame = BITDOGLAB_5X5.remap(&frame);
    let mut seen: Vec<u8> = strip_frame.iter().map(|color| color.r).collect();
    seen.sort_unstable();
    let expected: Vec<u8> = (0..25).collect();
    assert_eq!(seen, expected);
}

#[test]
fn new_accepts_valid_permutation() {
    const MAP: LedLayout<4, 2, 2> = LedLayout::new([(1, 1), (0, 0), (1, 0), (0, 1)]);
    assert_eq!(MAP.len(), 4);
    assert!(!MAP.is_empty());
    assert_eq!(MAP.xy_to_index(), [1, 2, 3, 0]);
}

#[test]
#[should_panic(expected = "duplicate (x, y) in mapping")]
fn new_rejects_duplicate_cell() {
    let _ = LedLayout::<4, 2, 2>::new([(0, 0), (0, 0), (1, 0), (0, 1)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn new_rejects_out_of_bounds_column() {
    let _ = LedLayout::<4, 2, 2>::new([(0, 0), (2, 0), (1, 0), (0, 1)]);
}
