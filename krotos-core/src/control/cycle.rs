//! Cycle controller
//!
//! Derives state machine events from debounced button levels and elapsed
//! time, applies the pure transition function, and returns the side
//! effects of each poll as data. Executing the effects is the caller's
//! job, which keeps the whole cycle testable without hardware.

use heapless::Vec;

use crate::config::CycleConfig;
use crate::input::DebounceFilter;
use crate::motion::{AnglePair, SweepController, SweepUpdate};
use crate::state::{Event, State};

/// Upper bound on effects emitted by a single poll
pub const MAX_EFFECTS: usize = 4;

/// Effects requested by one controller poll, in execution order
pub type Effects = Vec<Effect, MAX_EFFECTS>;

/// A side effect the caller must execute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    /// Write both arm angles to the actuators
    SetAngles(AnglePair),
    /// Stop any active cue playback
    StopPlayback,
    /// Start playback of the given track
    PlayCue(u16),
}

/// Greeting cycle controller
///
/// Owns every piece of mutable control state: the two debounce filters,
/// the current [`State`] with its entry timestamp, the sweep controller,
/// and the pending-cue settle timer. Poll it once per control-loop
/// iteration with fresh raw pin reads and a monotonic millisecond
/// timestamp.
#[derive(Debug)]
pub struct Controller {
    config: CycleConfig,
    /// Left palm button
    left: DebounceFilter,
    /// Right palm button
    right: DebounceFilter,
    /// Current machine state
    state: State,
    /// Timestamp at which the current state was entered (ms)
    entered_at_ms: u32,
    /// Arm sweep controller
    sweep: SweepController,
    /// Whether a cue play is pending behind the settle delay
    cue_pending: bool,
    /// Timestamp at which the pending cue was armed (ms)
    cue_armed_at_ms: u32,
}

impl Controller {
    /// Create a controller seeded from the current raw button reads
    pub fn new(config: CycleConfig, left_raw: bool, right_raw: bool, now_ms: u32) -> Self {
        Self {
            left: DebounceFilter::new(left_raw, config.debounce_ms, now_ms),
            right: DebounceFilter::new(right_raw, config.debounce_ms, now_ms),
            state: State::Idle,
            entered_at_ms: now_ms,
            sweep: SweepController::new(config.rest, config.step_delay_ms),
            cue_pending: false,
            cue_armed_at_ms: 0,
            config,
        }
    }

    /// Current machine state
    pub fn state(&self) -> State {
        self.state
    }

    /// Active configuration
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Whether both buttons currently read stably pressed
    pub fn both_pressed(&self) -> bool {
        self.left.pressed() && self.right.pressed()
    }

    /// Whether both buttons currently read stably released
    pub fn both_released(&self) -> bool {
        !self.left.pressed() && !self.right.pressed()
    }

    /// Process one control-loop iteration
    ///
    /// Raw levels are the instantaneous pin reads (`true` = electrically
    /// high). Returns the effects to execute, in order.
    pub fn update(&mut self, left_raw: bool, right_raw: bool, now_ms: u32) -> Effects {
        let mut effects = Effects::new();

        // Buttons are sampled every poll, including mid-sweep
        self.left.update(left_raw, now_ms);
        self.right.update(right_raw, now_ms);

        // Fire a pending cue once the settle delay has passed
        if self.cue_pending
            && now_ms.wrapping_sub(self.cue_armed_at_ms) >= self.config.cue_settle_ms
        {
            self.cue_pending = false;
            let _ = effects.push(Effect::PlayCue(self.config.track));
        }

        // Input- and time-derived events
        let event = match self.state {
            State::Idle if self.both_pressed() => Some(Event::ButtonsPressed),
            State::Holding
                if now_ms.wrapping_sub(self.entered_at_ms) >= self.config.hold_ms =>
            {
                Some(Event::HoldExpired)
            }
            State::WaitRelease if self.both_released() => Some(Event::ButtonsReleased),
            _ => None,
        };
        if let Some(event) = event {
            self.dispatch(event, now_ms, &mut effects);
        }

        // Motion-derived events
        if self.state.is_moving() {
            match self.sweep.tick(now_ms) {
                SweepUpdate::Idle => {}
                SweepUpdate::Step(angles) => {
                    let _ = effects.push(Effect::SetAngles(angles));
                }
                SweepUpdate::Arrived(angles) => {
                    let _ = effects.push(Effect::SetAngles(angles));
                    self.dispatch(Event::SweepArrived, now_ms, &mut effects);
                }
            }
        }

        effects
    }

    /// Apply an event to the state machine and run entry actions
    fn dispatch(&mut self, event: Event, now_ms: u32, effects: &mut Effects) {
        let next = self.state.transition(event);
        if next == self.state {
            return;
        }

        self.state = next;
        self.entered_at_ms = now_ms;

        match next {
            State::MovingToTarget => {
                self.sweep.start(self.config.engaged, now_ms);
                // Cue ordering contract: stop first, play after the settle
                // delay, so a still-active cue never overlaps the new one
                let _ = effects.push(Effect::StopPlayback);
                self.cue_pending = true;
                self.cue_armed_at_ms = now_ms;
            }
            State::Returning => {
                self.sweep.start(self.config.rest, now_ms);
            }
            State::Idle | State::Holding | State::WaitRelease => {}
        }
    }
}
