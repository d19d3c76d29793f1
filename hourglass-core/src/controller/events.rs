//! Button events

/// A press of one of the three timer buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// First button (add the configured A step, one minute by default)
    A,
    /// Second button (add the configured B step, 30 seconds by default)
    B,
    /// Third button (reset to zero)
    C,
}

impl ButtonEvent {
    /// Check if this event clears the timer
    pub fn is_reset(&self) -> bool {
        matches!(self, ButtonEvent::C)
    }
}
