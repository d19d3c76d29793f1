//! Frame tick task
//!
//! Owns the timer controller and the display. Every frame it applies the
//! button presses queued since the previous frame, clears the matrix,
//! renders the current time and hands the latched frame to the strip task.

use defmt::*;
use embassy_time::{Duration, Ticker};

use hourglass_core::TimerController;
use hourglass_display::{Display, LedMatrix};

use crate::channels::{BUTTON_CHANNEL, FRAME_SIGNAL};

/// Tick task - one iteration per frame
#[embassy_executor::task]
pub async fn tick_task(
    mut display: Display<LedMatrix>,
    mut controller: TimerController,
    interval_ms: u64,
) {
    info!("Tick task started ({} ms per frame)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms));
    let mut was_expired = controller.is_expired();

    loop {
        ticker.next().await;

        let applied = controller.drain(core::iter::from_fn(|| BUTTON_CHANNEL.try_receive().ok()));
        if applied > 0 {
            let time = controller.time();
            debug!(
                "Applied {} button event(s), now {}:{}",
                applied,
                time.minutes(),
                time.seconds()
            );
        }

        if let Err(e) = display.clear() {
            error!("Display clear failed: {:?}", e);
            break;
        }
        if let Err(e) = controller.tick(&mut display) {
            error!("Display update failed: {:?}", e);
            break;
        }

        if let Some(frame) = display.sink_mut().take_frame() {
            FRAME_SIGNAL.signal(frame);
        }

        let expired = controller.is_expired();
        if expired && !was_expired {
            info!("Timer reached 0:00");
        }
        was_expired = expired;

        trace!("Frame {}", display.sink().frames_presented());
    }

    error!("Tick task stopped, display is no longer updated");
}
