//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in krotos-core for the prop's hardware:
//!
//! - Servo arm pair (PWM, standard hobby-servo pulse mapping)
//! - Serial sound cue module (framed UART command protocol)

#![no_std]
#![deny(unsafe_code)]

pub mod audio;
pub mod servo;
