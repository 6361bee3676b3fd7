//! Coordinated arm motion
//!
//! Lock-step sweeps of both arm axes toward a target pose, paced by a
//! fixed per-step delay.

pub mod sweep;

pub use sweep::{AnglePair, SweepController, SweepUpdate};
