//! The displayed digit and its wrapping counter.

use crate::glyph::{Glyph, lookup};
use crate::{Error, Result};

/// Number of distinct digits.
const RADIX: u8 = 10;

/// A decimal digit, always in `0..=9`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub struct Digit(u8);

impl Digit {
    /// The power-on digit.
    pub const ZERO: Self = Self(0);
    /// The largest digit.
    pub const NINE: Self = Self(9);

    /// Creates a digit, or returns [`Error::DigitOutOfRange`] if `value > 9`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] for values above 9.
    pub const fn new(value: u8) -> Result<Self> {
        if value < RADIX {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// The digit as a number in `0..=9`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `(d + 1) mod 10`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % RADIX)
    }

    /// `(d - 1 + 10) mod 10`, so 0 wraps to 9 rather than going negative.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + RADIX - 1) % RADIX)
    }

    /// The 5×5 bitmap for this digit.
    #[must_use]
    pub const fn glyph(self) -> Glyph {
        lookup(self)
    }

    /// Iterates over all ten digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..RADIX).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl core::fmt::Display for Digit {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Holds the displayed digit and steps it with wraparound.
///
/// `increment` and `decrement` overwrite the stored digit and return the new one.
///
/// ```rust
/// use digit_matrix::digit::{Digit, DigitCounter};
///
/// let mut counter = DigitCounter::new();
/// assert_eq!(counter.decrement(), Digit::NINE);
/// assert_eq!(counter.increment(), Digit::ZERO);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DigitCounter {
    digit: Digit,
}

impl DigitCounter {
    /// Creates a counter showing [`Digit::ZERO`].
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Digit::ZERO)
    }

    /// Creates a counter showing `digit`.
    #[must_use]
    pub const fn starting_at(digit: Digit) -> Self {
        Self { digit }
    }

    /// The current digit.
    #[must_use]
    pub const fn digit(&self) -> Digit {
        self.digit
    }

    /// Steps up by one, 9 wrapping to 0.
    pub const fn increment(&mut self) -> Digit {
        self.digit = self.digit.next();
        self.digit
    }

    /// Steps down by one, 0 wrapping to 9.
    pub const fn decrement(&mut self) -> Digit {
        self.digit = self.digit.prev();
        self.digit
    }
}
