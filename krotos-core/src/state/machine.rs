//! State machine definition
//!
//! All arm motion and cue behavior is a function of the current state and
//! an event. The machine is a single perpetual cycle; there is no terminal
//! state.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Arms at rest, waiting for both buttons
    #[default]
    Idle,
    /// Sweeping both arms to the engaged pose; cue triggered on entry
    MovingToTarget,
    /// Dwelling at the engaged pose
    Holding,
    /// Sweeping both arms back to rest
    Returning,
    /// Back at rest, waiting for both buttons to be released
    WaitRelease,
}

impl State {
    /// Check if this state has a sweep in flight
    pub fn is_moving(&self) -> bool {
        matches!(self, State::MovingToTarget | State::Returning)
    }

    /// Check if this state accepts button input
    pub fn reads_buttons(&self) -> bool {
        matches!(self, State::Idle | State::WaitRelease)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic. The cycle is strict:
    /// Idle -> MovingToTarget -> Holding -> Returning -> WaitRelease -> Idle.
    /// Events that do not apply to the current state leave it unchanged,
    /// which is what prevents a re-trigger while the visitor's hands are
    /// still on the buttons.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, ButtonsPressed) => MovingToTarget,
            (MovingToTarget, SweepArrived) => Holding,
            (Holding, HoldExpired) => Returning,
            (Returning, SweepArrived) => WaitRelease,
            (WaitRelease, ButtonsReleased) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }
}
