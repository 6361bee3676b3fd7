//! Device wrapper binding the controller to hardware capabilities
//!
//! The capabilities are injected at construction; the core never names a
//! concrete driver type, so simulated doubles slot in for testing.

use crate::config::CycleConfig;
use crate::control::cycle::{Controller, Effect};
use crate::state::State;
use crate::traits::{ArmActuators, CueBackend};

/// The assembled prop: controller plus injected actuator and cue backends
pub struct Device<A, C>
where
    A: ArmActuators,
    C: CueBackend,
{
    controller: Controller,
    arms: A,
    cue: C,
}

impl<A, C> Device<A, C>
where
    A: ArmActuators,
    C: CueBackend,
{
    /// Assemble a device, seeding the controller from the current raw
    /// button reads
    pub fn new(
        config: CycleConfig,
        arms: A,
        cue: C,
        left_raw: bool,
        right_raw: bool,
        now_ms: u32,
    ) -> Self {
        Self {
            controller: Controller::new(config, left_raw, right_raw, now_ms),
            arms,
            cue,
        }
    }

    /// Current machine state
    pub fn state(&self) -> State {
        self.controller.state()
    }

    /// Poll once and execute the resulting effects
    ///
    /// Cue backend errors are dropped here: playback is fire-and-forget
    /// and has no recovery path mid-cycle. The firmware bring-up sequence
    /// is where cue transport health is actually established.
    pub fn poll(&mut self, left_raw: bool, right_raw: bool, now_ms: u32) {
        for effect in self.controller.update(left_raw, right_raw, now_ms) {
            match effect {
                Effect::SetAngles(angles) => self.arms.set_angles(angles),
                Effect::StopPlayback => {
                    let _ = self.cue.stop();
                }
                Effect::PlayCue(track) => {
                    let _ = self.cue.play(track);
                }
            }
        }
    }
}
