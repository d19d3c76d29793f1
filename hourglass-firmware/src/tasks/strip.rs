//! LED strip output task
//!
//! Waits for frames from the tick task and shifts them out to the WS2812
//! matrix. Only the newest frame is written if several arrive at once.

use defmt::*;
use embassy_rp::peripherals::PIO0;

use hourglass_hal_rp2040::Ws2812Strip;

use crate::channels::FRAME_SIGNAL;

/// Strip task - writes each finished frame to the LEDs
#[embassy_executor::task]
pub async fn strip_task(mut strip: Ws2812Strip<'static, PIO0, 0>) {
    info!("Strip task started");

    strip.blank().await;

    loop {
        let frame = FRAME_SIGNAL.wait().await;
        strip.write(&frame).await;
    }
}
