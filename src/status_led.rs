//! A plain GPIO LED that blinks while the firmware runs.
//!
//! See [`StatusLed`].

use embassy_rp::Peri;
use embassy_rp::gpio::{Level, Output, Pin};
use embassy_time::{Duration, Timer};

/// Time between toggles of the status LED.
pub const STATUS_BLINK_DELAY: Duration = Duration::from_millis(100);

/// A single LED wired to a GPIO pin (the red LED, GPIO13, on BitDogLab).
///
/// Blinking shows the executor is alive. It is independent of the matrix and
/// the buttons.
pub struct StatusLed<'a> {
    output: Output<'a>,
}

impl<'a> StatusLed<'a> {
    /// Creates a status LED on `pin`, initially off.
    #[must_use]
    pub fn new<P: Pin>(pin: Peri<'a, P>) -> Self {
        Self {
            output: Output::new(pin, Level::Low),
        }
    }

    /// Toggles the LED every [`STATUS_BLINK_DELAY`], forever.
    pub async fn blink_forever(&mut self) -> ! {
        loop {
            self.output.toggle();
            Timer::after(STATUS_BLINK_DELAY).await;
        }
    }
}
