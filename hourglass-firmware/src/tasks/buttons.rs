//! Button input task
//!
//! One instance per physical button. Each debounced press becomes a
//! `ButtonEvent` on `BUTTON_CHANNEL`.

use defmt::*;
use embassy_rp::gpio::Input;

use hourglass_core::ButtonEvent;
use hourglass_hal_rp2040::Button;

use crate::channels::BUTTON_CHANNEL;

/// Button task - forwards presses of one button
#[embassy_executor::task(pool_size = 3)]
pub async fn button_task(mut button: Button<Input<'static>>, event: ButtonEvent) {
    info!("Button task started for {:?}", event);

    loop {
        // GPIO input errors are infallible on the RP2040
        if button.wait_for_press().await.is_err() {
            warn!("Button {:?} read failed", event);
            continue;
        }

        if event.is_reset() {
            info!("Reset requested");
        } else {
            debug!("Button {:?} pressed", event);
        }
        if BUTTON_CHANNEL.try_send(event).is_err() {
            warn!("Button queue full, dropping {:?}", event);
        }
    }
}
