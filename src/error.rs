//! Crate-wide error and result types.

use derive_more::{Display, Error, From};
use embassy_executor::SpawnError;

/// Errors reported by the digit matrix.
///
/// None of these are recoverable at runtime. Firmware reports them by panicking with
/// the [`Display`](core::fmt::Display) text.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// A firmware task could not be spawned (its pool is already in use).
    #[display("failed to spawn task: {_0:?}")]
    TaskSpawn(#[error(not(source))] SpawnError),

    /// A [`Digit`](crate::digit::Digit) was built from a value outside `0..=9`.
    #[display("digit value {_0} is outside 0..=9")]
    #[from(ignore)]
    DigitOutOfRange(#[error(not(source))] u8),
}

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
