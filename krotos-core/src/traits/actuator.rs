//! Arm actuator trait

use crate::motion::AnglePair;

/// A pair of angular actuators addressed by absolute angle
///
/// Implementations must accept writes at least as fast as one per sweep
/// step period without queuing. Writes are not individually acknowledged;
/// an actuator write has no recovery path mid-sweep, so implementations
/// log and drop transport errors rather than surfacing them.
pub trait ArmActuators {
    /// Command both arms to the given absolute angles
    fn set_angles(&mut self, angles: AnglePair);
}
