//! Drawing digits on the matrix, outside the button edge path.
//!
//! See [`DigitDisplay`] for the render loop and [`PixelTransmitter`] for the
//! seam to the LED hardware.

use core::convert::Infallible;

use crate::Result;
use crate::digit::Digit;
use crate::frame::{Frame, PIXEL_COUNT, PixelFrame, render};
use crate::layout::{LedLayout, MATRIX_HEIGHT, MATRIX_WIDTH};
use crate::state::DigitDisplayState;

#[cfg(not(feature = "host"))]
pub mod ws2812;

/// Sends a frame of `N` colors to an LED strip, in order.
///
/// Returns once every pixel has been handed to the underlying serial generator.
/// The trait does not own the bit timing or the color channel order; those are
/// the implementor's concern.
pub trait PixelTransmitter<const N: usize> {
    /// Writes `frame` to the strip. `frame[0]` goes to the first LED on the data line.
    async fn transmit(&mut self, frame: &Frame<N>) -> Result<()>;
}

/// Renders digits and writes them to the matrix.
///
/// Each digit goes through glyph lookup, [`render`], then the wiring
/// [`LedLayout`], and the whole frame is transmitted. There are no partial updates.
///
/// # Example
///
/// ```rust
/// # use digit_matrix::{Result, digit::Digit, frame::{Frame, PIXEL_COUNT}};
/// use digit_matrix::display::{DigitDisplay, PixelTransmitter};
/// use digit_matrix::layout::BITDOGLAB_5X5;
///
/// struct LastFrame(Option<Frame<PIXEL_COUNT>>);
///
/// impl PixelTransmitter<PIXEL_COUNT> for LastFrame {
///     async fn transmit(&mut self, frame: &Frame<PIXEL_COUNT>) -> Result<()> {
///         self.0 = Some(*frame);
///         Ok(())
///     }
/// }
///
/// let mut digit_display = DigitDisplay::new(LastFrame(None), &BITDOGLAB_5X5);
/// embassy_futures::block_on(digit_display.show(Digit::ZERO)).unwrap();
/// assert_eq!(digit_display.transmitter().0.unwrap().lit_count(), 12);
/// ```
pub struct DigitDisplay<T> {
    transmitter: T,
    led_layout: LedLayout<PIXEL_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT>,
}

impl<T: PixelTransmitter<PIXEL_COUNT>> DigitDisplay<T> {
    /// Creates a display writing through `transmitter`, with LEDs wired as `led_layout`.
    #[must_use]
    pub const fn new(
        transmitter: T,
        led_layout: &LedLayout<PIXEL_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT>,
    ) -> Self {
        Self {
            transmitter,
            led_layout: *led_layout,
        }
    }

    /// The frame that [`show`](Self::show) would transmit for `digit`, in wiring order.
    #[must_use]
    pub fn strip_frame(&self, digit: Digit) -> PixelFrame {
        self.led_layout.remap(&render(digit.glyph()))
    }

    /// Renders `digit` and transmits the full frame.
    ///
    /// # Errors
    ///
    /// Returns any error from the transmitter.
    pub async fn show(&mut self, digit: Digit) -> Result<()> {
        let strip_frame = self.strip_frame(digit);
        self.transmitter.transmit(&strip_frame).await
    }

    /// Draws the pending digit, if there is one, without waiting.
    ///
    /// Returns the digit that was drawn.
    ///
    /// # Errors
    ///
    /// Returns any error from the transmitter.
    pub async fn render_pending(&mut self, state: &DigitDisplayState) -> Result<Option<Digit>> {
        let Some(digit) = state.take_pending() else {
            return Ok(None);
        };
        self.show(digit).await?;
        Ok(Some(digit))
    }

    /// Draws every digit posted to `state`, forever.
    ///
    /// # Errors
    ///
    /// Returns the first error from the transmitter.
    pub async fn run(&mut self, state: &DigitDisplayState) -> Result<Infallible> {
        loop {
            let digit = state.wait_for_render().await;
            #[cfg(not(feature = "host"))]
            defmt::debug!("DigitDisplay::run: drawing {}", digit);
            self.show(digit).await?;
        }
    }

    /// The transmitter frames are written to.
    #[must_use]
    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }
}
