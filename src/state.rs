//! State shared between the button edge path and the display loop.
//!
//! See [`DigitDisplayState`].

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicU32, Ordering};

use crate::debounce::{ButtonEvent, ButtonId, DebounceGate};
use crate::digit::{Digit, DigitCounter};

/// Single-slot render request: holds the most recent digit not yet drawn.
pub type PendingRender = Signal<CriticalSectionRawMutex, Digit>;

// Debounce timestamps and the counter change together, so they share one lock.
struct EdgeState {
    debounce_gate: DebounceGate,
    digit_counter: DigitCounter,
}

/// Process-wide state behind the buttons and the matrix.
///
/// The edge path calls [`on_edge`](Self::on_edge), which debounces, steps the
/// counter, and posts the new digit to a single-slot pending-render signal. It
/// never renders or transmits. The display loop drains that signal with
/// [`wait_for_render`](Self::wait_for_render) or
/// [`take_pending`](Self::take_pending) and does the drawing outside the edge path.
///
/// Debounce timestamps and the digit are only ever read or mutated inside a
/// critical section, and the pending digit is posted inside that same section.
/// If two edges are accepted before the display loop runs, only the newer digit
/// is drawn.
///
/// Meant to live in a `static`:
///
/// ```rust
/// use digit_matrix::debounce::{ButtonEvent, ButtonId};
/// use digit_matrix::digit::Digit;
/// use digit_matrix::state::DigitDisplayState;
///
/// static DIGIT_STATE: DigitDisplayState = DigitDisplayState::new();
///
/// assert_eq!(DIGIT_STATE.on_edge(ButtonEvent::at_micros(ButtonId::B, 0)), Some(Digit::NINE));
/// assert_eq!(DIGIT_STATE.take_pending(), Some(Digit::NINE));
/// assert_eq!(DIGIT_STATE.take_pending(), None);
/// ```
pub struct DigitDisplayState {
    edge_state: Mutex<CriticalSectionRawMutex, RefCell<EdgeState>>,
    pending_render: PendingRender,
    dropped_edges: AtomicU32,
}

impl DigitDisplayState {
    /// Creates the power-on state: digit 0, no accepted edges, nothing pending.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Digit::ZERO)
    }

    /// Creates a state showing `digit` with no accepted edges and nothing pending.
    #[must_use]
    pub const fn starting_at(digit: Digit) -> Self {
        Self {
            edge_state: Mutex::new(RefCell::new(EdgeState {
                debounce_gate: DebounceGate::new(),
                digit_counter: DigitCounter::starting_at(digit),
            })),
            pending_render: Signal::new(),
            dropped_edges: AtomicU32::new(0),
        }
    }

    /// Handles one raw edge.
    ///
    /// Returns the new digit if the edge passed the debounce gate; Button A steps
    /// up, Button B steps down. A dropped edge changes nothing except the
    /// [`dropped_edges`](Self::dropped_edges) count.
    pub fn on_edge(&self, event: ButtonEvent) -> Option<Digit> {
        let accepted = self.edge_state.lock(|edge_state| {
            let mut edge_state = edge_state.borrow_mut();
            if !edge_state
                .debounce_gate
                .accept(event.button, event.timestamp)
            {
                return None;
            }
            let digit = match event.button {
                ButtonId::A => edge_state.digit_counter.increment(),
                ButtonId::B => edge_state.digit_counter.decrement(),
            };
            // Posted under the same lock so the pending digit never lags the counter.
            self.pending_render.signal(digit);
            Some(digit)
        });

        if accepted.is_none() {
            self.dropped_edges.fetch_add(1, Ordering::Relaxed);
        }
        accepted
    }

    /// The digit currently held by the counter.
    #[must_use]
    pub fn digit(&self) -> Digit {
        self.edge_state
            .lock(|edge_state| edge_state.borrow().digit_counter.digit())
    }

    /// Number of edges the debounce gate has dropped since power-on.
    #[must_use]
    pub fn dropped_edges(&self) -> u32 {
        self.dropped_edges.load(Ordering::Relaxed)
    }

    /// Posts the current digit for rendering, e.g. to draw the power-on digit.
    pub fn request_render(&self) {
        self.edge_state.lock(|edge_state| {
            self.pending_render
                .signal(edge_state.borrow().digit_counter.digit());
        });
    }

    /// Waits until a digit is pending, then takes it.
    pub async fn wait_for_render(&self) -> Digit {
        self.pending_render.wait().await
    }

    /// Takes the pending digit, if any, without waiting.
    #[must_use]
    pub fn take_pending(&self) -> Option<Digit> {
        self.pending_render.try_take()
    }

    /// Whether a digit is waiting to be drawn.
    #[must_use]
    pub fn is_render_pending(&self) -> bool {
        self.pending_render.signaled()
    }
}

impl Default for DigitDisplayState {
    fn default() -> Self {
        Self::new()
    }
}
