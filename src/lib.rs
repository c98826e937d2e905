//! Show a single digit on a 5×5 NeoPixel-style (WS2812) LED matrix, stepped up and
//! down by two debounced buttons, on a Pico 1 or Pico 2.
//!
//! The pipeline, leaf to root:
//!
//! - [`debounce`]: drops edges that arrive within [`DEBOUNCE_WINDOW`](debounce::DEBOUNCE_WINDOW) of the last accepted one.
//! - [`digit`]: the wrapping 0–9 counter.
//! - [`glyph`]: the constant 5×5 bitmap for each digit.
//! - [`frame`]: turns a bitmap into 25 pixel colors.
//! - [`layout`]: reorders a row-major frame into the order the LEDs are wired.
//! - [`state`]: the state shared with the button edge path, plus the pending-render signal.
//! - [`display`]: drains pending renders and hands frames to a [`PixelTransmitter`](display::PixelTransmitter).
//!
//! # Glossary
//!
//! - **Debounce:** suppressing the extra transitions a mechanical contact produces,
//!   using a minimum time between accepted edges.
//! - **Glyph:** the fixed on/off bitmap for one digit.
//! - **Frame:** one complete set of per-pixel colors for the whole matrix, written as a unit.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the Pico block that generates the 800 kHz WS2812 bit timing.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: an architecture must be selected (unless testing with host feature)
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the architecture feature: 'arm'");

// These modules require embassy_rp and are excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod button;
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub mod pio_irqs;
#[cfg(not(feature = "host"))]
pub mod status_led;
// Host-testable core
pub mod debounce;
pub mod digit;
pub mod display;
mod error;
pub mod frame;
pub mod glyph;
pub mod layout;
pub mod state;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
