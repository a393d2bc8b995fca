//! Room transition state machine
//!
//! Two states: idle and transitioning. Entering a door starts a timed
//! transition during which normal gameplay is suspended; only the timer
//! advances. The timer doubles as a debounce so crossing a threshold
//! twice in quick succession cannot fire two room changes.

/// How long a room transition suspends gameplay, in seconds.
pub const TRANSITION_DURATION: f64 = 0.2;

/// State of the room-change beat. Time is the monotonic clock from
/// `macroquad::time::get_time()`, passed in explicitly so the machine is
/// testable without a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Idle,
    Transitioning { started: f64 },
}

impl TransitionState {
    pub fn new() -> Self {
        TransitionState::Idle
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self, TransitionState::Transitioning { .. })
    }

    /// Try to begin a transition. Returns false while one is already
    /// running - the caller must not change rooms in that case.
    pub fn begin(&mut self, now: f64) -> bool {
        if self.is_transitioning() {
            return false;
        }
        *self = TransitionState::Transitioning { started: now };
        true
    }

    /// Advance the timer; flips back to idle once the duration elapses.
    /// The elapsed check saturates at zero, so a clock that jumps
    /// backwards cannot produce a never-ending transition window.
    pub fn update(&mut self, now: f64) {
        if let TransitionState::Transitioning { started } = *self {
            let elapsed = (now - started).max(0.0);
            if elapsed >= TRANSITION_DURATION {
                *self = TransitionState::Idle;
            }
        }
    }
}

impl Default for TransitionState {
    fn default() -> Self {
        Self::new()
    }
}
