//! Push-buttons that report raw press edges to the digit state.
//!
//! See [`EdgeButton`] for usage example.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_time::Instant;

use crate::debounce::{ButtonEvent, ButtonId};
use crate::state::DigitDisplayState;

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Uses internal pull-down resistor. A press is a rising edge.
    ///
    /// Note: Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use `Ground` instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Uses internal pull-up resistor. A press is a falling edge.
    /// This is how the BitDogLab buttons are wired.
    Ground,
}

impl PressedTo {
    const fn pull(self) -> Pull {
        match self {
            Self::Voltage => Pull::Down,
            Self::Ground => Pull::Up,
        }
    }
}

// ============================================================================
// EdgeButton
// ============================================================================

/// A button whose press edges feed a [`DigitDisplayState`].
///
/// Each press edge is stamped with [`Instant::now`], read once, and handed to
/// [`DigitDisplayState::on_edge`]. Debouncing happens there, so every raw edge
/// is reported, bounces included. Nothing here renders or touches the matrix.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use digit_matrix::button::{EdgeButton, PressedTo};
/// use digit_matrix::debounce::ButtonId;
/// use digit_matrix::state::DigitDisplayState;
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// static DIGIT_STATE: DigitDisplayState = DigitDisplayState::new();
///
/// async fn example(p: embassy_rp::Peripherals) -> ! {
///     let mut button_a = EdgeButton::new(p.PIN_5, PressedTo::Ground);
///     button_a.watch(ButtonId::A, &DIGIT_STATE).await
/// }
/// ```
pub struct EdgeButton<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
}

impl<'a> EdgeButton<'a> {
    /// Creates a new `EdgeButton` from a pin.
    ///
    /// The pin is configured based on the connection type:
    /// - [`PressedTo::Voltage`]: Uses internal pull-down (button to 3.3V)
    /// - [`PressedTo::Ground`]: Uses internal pull-up (button to GND)
    #[must_use]
    pub fn new<P: Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        Self {
            input: Input::new(pin, pressed_to.pull()),
            pressed_to,
        }
    }

    /// Waits for the next press edge and returns the time it was seen.
    pub async fn wait_for_press_edge(&mut self) -> Instant {
        match self.pressed_to {
            PressedTo::Voltage => self.input.wait_for_rising_edge().await,
            PressedTo::Ground => self.input.wait_for_falling_edge().await,
        }
        Instant::now()
    }

    /// Reports every press edge of this button, as `button_id`, to `state`. Never returns.
    pub async fn watch(&mut self, button_id: ButtonId, state: &DigitDisplayState) -> ! {
        loop {
            let timestamp = self.wait_for_press_edge().await;
            let event = ButtonEvent::new(button_id, timestamp);
            match state.on_edge(event) {
                Some(digit) => defmt::debug!("button {:?}: digit -> {}", button_id, digit),
                None => defmt::trace!("button {:?}: bounce dropped", button_id),
            }
        }
    }
}
