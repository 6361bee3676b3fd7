//! Servo arm pair driver
//!
//! Drives the two arm servos through `embedded-hal` PWM channels using the
//! standard hobby-servo mapping: a 50 Hz period with the pulse width
//! varying from 0.5 ms at 0 degrees to 2.5 ms at 180 degrees.
//!
//! Angle writes are best-effort: a failed duty update mid-sweep has no
//! recovery path, so errors are swallowed and the next step simply writes
//! the next angle.

use embedded_hal::pwm::SetDutyCycle;

use krotos_core::motion::AnglePair;
use krotos_core::traits::ArmActuators;

/// Servo pulse calibration
#[derive(Debug, Clone, Copy)]
pub struct ServoConfig {
    /// PWM period in microseconds (50 Hz frame)
    pub period_us: u32,
    /// Pulse width at 0 degrees
    pub min_pulse_us: u32,
    /// Pulse width at the maximum angle
    pub max_pulse_us: u32,
    /// Maximum commandable angle in degrees
    pub max_angle: u8,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            period_us: 20_000,
            min_pulse_us: 500,
            max_pulse_us: 2_500,
            max_angle: 180,
        }
    }
}

impl ServoConfig {
    /// Convert an angle to a duty value for a channel with the given
    /// maximum duty
    ///
    /// Angles beyond `max_angle` are clamped.
    pub fn angle_to_duty(&self, angle: u8, max_duty: u16) -> u16 {
        let angle = angle.min(self.max_angle) as u32;
        let span = self.max_pulse_us - self.min_pulse_us;
        let pulse_us = self.min_pulse_us + angle * span / self.max_angle as u32;
        (pulse_us * max_duty as u32 / self.period_us) as u16
    }
}

/// The two arm servos as one actuator pair
pub struct ServoPair<L, R> {
    left: L,
    right: R,
    config: ServoConfig,
}

impl<L, R> ServoPair<L, R>
where
    L: SetDutyCycle,
    R: SetDutyCycle,
{
    /// Create a servo pair with the default hobby-servo calibration
    pub fn new(left: L, right: R) -> Self {
        Self::with_config(left, right, ServoConfig::default())
    }

    /// Create a servo pair with custom calibration
    pub fn with_config(left: L, right: R, config: ServoConfig) -> Self {
        Self {
            left,
            right,
            config,
        }
    }

    /// Get the calibration
    pub fn config(&self) -> &ServoConfig {
        &self.config
    }
}

impl<L, R> ArmActuators for ServoPair<L, R>
where
    L: SetDutyCycle,
    R: SetDutyCycle,
{
    fn set_angles(&mut self, angles: AnglePair) {
        let left_duty = self.config.angle_to_duty(angles.left, self.left.max_duty_cycle());
        let right_duty = self
            .config
            .angle_to_duty(angles.right, self.right.max_duty_cycle());

        let _ = self.left.set_duty_cycle(left_duty);
        let _ = self.right.set_duty_cycle(right_duty);
    }
}
