#![allow(missing_docs)]
//! Host-level tests for digits and the wrapping counter.

use digit_matrix::Error;
use digit_matrix::digit::{Digit, DigitCounter};
use proptest::prelude::*;

#[test]
fn new_accepts_0_through_9() {
    for value in 0..=9_u8 {
        let digit = Digit::new(value).expect("in range");
        assert_eq!(digit.get(), value);
        assert_eq!(u8::from(digit), value);
    }
}

#[test]
fn new_rejects_values_above_9() {
    assert!(matches!(Digit::new(10), Err(Error::DigitOutOfRange(10))));
    assert!(matches!(
        Digit::try_from(255_u8),
        Err(Error::DigitOutOfRange(255))
    ));
}

#[test]
fn out_of_range_error_message() {
    let err = Digit::new(42).unwrap_err();
    assert_eq!(err.to_string(), "digit value 42 is outside 0..=9");
}

#[test]
fn increment_wraps_9_to_0() {
    let mut counter = DigitCounter::starting_at(Digit::NINE);
    assert_eq!(counter.increment(), Digit::ZERO);
    assert_eq!(counter.digit(), Digit::ZERO);
}

#[test]
fn decrement_wraps_0_to_9() {
    let mut counter = DigitCounter::new();
    assert_eq!(counter.decrement(), Digit::NINE);
    assert_eq!(counter.digit(), Digit::NINE);
}

#[test]
fn all_lists_every_digit_in_order() {
    let values: Vec<u8> = Digit::all().map(Digit::get).collect();
    assert_eq!(values, (0..=9).collect::<Vec<u8>>());
}

#[test]
fn display_prints_value() {
    assert_eq!(Digit::NINE.to_string(), "9");
}

proptest! {
    #[test]
    fn n_increments_from_zero_give_n_mod_10(n in 0_usize..1_000) {
        let mut counter = DigitCounter::new();
        for _ in 0..n {
            counter.increment();
        }
        prop_assert_eq!(usize::from(counter.digit().get()), n % 10);
    }

    #[test]
    fn n_decrements_from_zero_give_ten_minus_n_mod_10(n in 0_usize..1_000) {
        let mut counter = DigitCounter::new();
        for _ in 0..n {
            counter.decrement();
        }
        let value = counter.digit().get();
        prop_assert!(value <= 9);
        prop_assert_eq!(usize::from(value), (10 - n % 10) % 10);
    }

    #[test]
    fn next_then_prev_is_identity(value in 0_u8..10) {
        let digit = Digit::new(value).expect("in range");
        prop_assert_eq!(digit.next().prev(), digit);
        prop_assert_eq!(digit.prev().next(), digit);
    }
}
