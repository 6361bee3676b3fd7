//! Time-window debounce filter
//!
//! The stable level only follows the raw level once the raw level has been
//! constant for a full debounce interval. Glitches shorter than the
//! interval never reach the stable output.

/// Debounce filter for a single digital input
///
/// Levels are plain booleans where `true` is electrically high. The palm
/// buttons are wired active-low with internal pull-ups, so [`pressed`]
/// reports the inverted stable level.
///
/// [`pressed`]: DebounceFilter::pressed
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceFilter {
    /// Last observed raw level
    raw: bool,
    /// Current stable (debounced) level
    stable: bool,
    /// Timestamp of the last raw level change (ms)
    last_change_ms: u32,
    /// Required constancy window (ms)
    interval_ms: u32,
}

impl DebounceFilter {
    /// Create a filter seeded from the current raw pin read
    ///
    /// The initial read is taken as both the raw and stable level, so a
    /// button held during power-up reads as pressed without waiting out a
    /// debounce interval.
    pub fn new(initial_raw: bool, interval_ms: u32, now_ms: u32) -> Self {
        Self {
            raw: initial_raw,
            stable: initial_raw,
            last_change_ms: now_ms,
            interval_ms,
        }
    }

    /// Feed one raw sample and return the stable level
    ///
    /// A raw level change restarts the constancy window; once the raw
    /// level has held for the full interval the stable level follows it.
    /// Calling with an unchanged raw level never alters the outcome.
    pub fn update(&mut self, raw: bool, now_ms: u32) -> bool {
        if raw != self.raw {
            self.raw = raw;
            self.last_change_ms = now_ms;
        }

        if now_ms.wrapping_sub(self.last_change_ms) >= self.interval_ms {
            self.stable = self.raw;
        }

        self.stable
    }

    /// Current stable level
    pub fn stable(&self) -> bool {
        self.stable
    }

    /// Whether the button reads as pressed (active-low wiring)
    pub fn pressed(&self) -> bool {
        !self.stable
    }
}
