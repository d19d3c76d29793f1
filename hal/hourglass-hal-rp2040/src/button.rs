//! Debounced momentary push-button
//!
//! Buttons are wired active-low with the internal pull-up enabled. A press
//! is reported once on the falling edge after the contact has settled; the
//! release is waited out (and debounced) before the next press is armed.
//! Only presses are reported; there is no hold or release event.

use embassy_time::{Duration, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

/// Settle time after the falling edge
pub const PRESS_DEBOUNCE_MS: u64 = 20;

/// Settle time after release
pub const RELEASE_DEBOUNCE_MS: u64 = 50;

/// Active-low push-button
pub struct Button<P> {
    pin: P,
    awaiting_release: bool,
}

impl<P> Button<P>
where
    P: InputPin + Wait,
{
    /// Wrap an input pin configured with a pull-up
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            awaiting_release: false,
        }
    }

    /// Wait for the next debounced press
    pub async fn wait_for_press(&mut self) -> Result<(), P::Error> {
        if self.awaiting_release {
            self.pin.wait_for_high().await?;
            Timer::after(Duration::from_millis(RELEASE_DEBOUNCE_MS)).await;
            self.awaiting_release = false;
        }

        loop {
            self.pin.wait_for_falling_edge().await?;
            Timer::after(Duration::from_millis(PRESS_DEBOUNCE_MS)).await;

            // Still held after settling: a real press rather than a glitch
            if self.pin.is_low()? {
                self.awaiting_release = true;
                return Ok(());
            }
        }
    }
}
