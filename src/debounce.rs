//! Minimum-interval debouncing of raw button edges.
//!
//! See [`DebounceGate`] for the policy.

use embassy_time::{Duration, Instant};

// ============================================================================
// Constants
// ============================================================================

/// An edge is accepted only if strictly more than this has passed since the
/// last accepted edge of the same button.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_micros(200_000);

// ============================================================================
// ButtonId - Which button produced an edge
// ============================================================================

/// Identifies one of the two push-buttons.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum ButtonId {
    /// Steps the digit up (GPIO5 on the BitDogLab board).
    A,
    /// Steps the digit down (GPIO6 on the BitDogLab board).
    B,
}

impl ButtonId {
    const fn slot(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

// ============================================================================
// ButtonEvent - One raw edge
// ============================================================================

/// A raw edge from a button, stamped with the time it was observed.
///
/// Produced by the edge source and consumed immediately by [`DebounceGate::accept`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct ButtonEvent {
    /// The button whose pin changed.
    pub button: ButtonId,
    /// Monotonic time of the edge, read once when the edge was observed.
    pub timestamp: Instant,
}

impl ButtonEvent {
    /// Creates an event for `button` observed at `timestamp`.
    #[must_use]
    pub const fn new(button: ButtonId, timestamp: Instant) -> Self {
        Self { button, timestamp }
    }

    /// Creates an event from a timestamp in microseconds since boot.
    #[must_use]
    pub const fn at_micros(button: ButtonId, micros: u64) -> Self {
        Self::new(button, Instant::from_micros(micros))
    }
}

// ============================================================================
// DebounceGate
// ============================================================================

/// Per-button minimum-interval filter.
///
/// `accept(button, now)` returns `true` and records `now` if more than
/// [`DEBOUNCE_WINDOW`] has elapsed since that button's last accepted edge.
/// Otherwise it returns `false` and changes nothing. Bouncing contacts and
/// rapid re-presses are dropped silently.
///
/// A button that has never had an edge accepted accepts its first edge
/// regardless of `now`. A `now` earlier than the last accepted time counts as
/// zero elapsed.
///
/// The gate is plain data. Code that shares it with an interrupt-driven edge
/// path keeps it inside a critical section, see
/// [`DigitDisplayState`](crate::state::DigitDisplayState).
///
/// # Example
///
/// ```rust
/// use digit_matrix::debounce::{ButtonId, DebounceGate};
/// use embassy_time::Instant;
///
/// let mut gate = DebounceGate::new();
/// assert!(gate.accept(ButtonId::A, Instant::from_millis(100)));
/// assert!(!gate.accept(ButtonId::A, Instant::from_millis(150))); // bounce
/// assert!(gate.accept(ButtonId::B, Instant::from_millis(150))); // independent window
/// assert!(gate.accept(ButtonId::A, Instant::from_millis(301)));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DebounceGate {
    last_accepted: [Option<Instant>; 2],
}

impl DebounceGate {
    /// Creates a gate with no accepted edges yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last_accepted: [None; 2],
        }
    }

    /// Decides whether the edge of `button` at `now` is a real press.
    ///
    /// `now` must be read once by the caller and passed here, so the decision
    /// and the stored timestamp agree.
    pub fn accept(&mut self, button: ButtonId, now: Instant) -> bool {
        let Some(last_accepted) = self.last_accepted.get_mut(button.slot()) else {
            return false;
        };
        let is_accepted = match *last_accepted {
            None => true,
            Some(previous) => now.saturating_duration_since(previous) > DEBOUNCE_WINDOW,
        };
        if is_accepted {
            *last_accepted = Some(now);
        }
        is_accepted
    }

    /// Returns the time of the last accepted edge of `button`, if any.
    #[must_use]
    pub fn last_accepted(&self, button: ButtonId) -> Option<Instant> {
        self.last_accepted.get(button.slot()).copied().flatten()
    }
}
