//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Both palm buttons read stably pressed
    ButtonsPressed,
    /// The active sweep reached its target pose on both axes
    SweepArrived,
    /// The dwell at the engaged pose has expired
    HoldExpired,
    /// Both palm buttons read stably released
    ButtonsReleased,
}

impl Event {
    /// Check if this event is derived from button input
    pub fn is_input_event(&self) -> bool {
        matches!(self, Event::ButtonsPressed | Event::ButtonsReleased)
    }

    /// Check if this event is derived from motion or time
    pub fn is_internal_event(&self) -> bool {
        matches!(self, Event::SweepArrived | Event::HoldExpired)
    }
}
