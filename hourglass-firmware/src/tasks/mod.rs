//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buttons;
pub mod strip;
pub mod tick;

pub use buttons::button_task;
pub use strip::strip_task;
pub use tick::tick_task;
