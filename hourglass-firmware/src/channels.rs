//! Inter-task communication channels
//!
//! Button tasks are the producers of `BUTTON_CHANNEL`; the tick task is its
//! only consumer and drains it once per frame. Finished frames go to the
//! strip task through `FRAME_SIGNAL`.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use hourglass_core::ButtonEvent;
use hourglass_display::Frame;

/// Channel capacity for button presses
///
/// A frame is at most 1/MAX_FRAME_RATE_HZ seconds long, far shorter than
/// eight debounced presses.
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Debounced button presses waiting for the next frame
pub static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Latest strip-ordered frame (older frames are overwritten)
pub static FRAME_SIGNAL: Signal<CriticalSectionRawMutex, Frame> = Signal::new();
