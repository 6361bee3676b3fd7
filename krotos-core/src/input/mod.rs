//! Button input handling
//!
//! Converts noisy raw pin reads into stable debounced levels.

pub mod debounce;

pub use debounce::DebounceFilter;
