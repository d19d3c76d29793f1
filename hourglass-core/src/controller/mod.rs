//! Timer controller
//!
//! Owns the running time value and the frame counter. Button events
//! mutate the time; each frame tick forwards the time to the display and,
//! once per second of frames, counts one second down (or up).

pub mod events;
pub mod timer;

pub use events::ButtonEvent;
pub use timer::{TickCounter, TimerController};
