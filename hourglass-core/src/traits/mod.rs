//! Hardware abstraction traits
//!
//! These traits define the interface between the timer logic and the
//! renderer that draws it.

pub mod display;

pub use display::TimeDisplay;
