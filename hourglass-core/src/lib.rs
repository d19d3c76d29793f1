//! Board-agnostic core logic for the Hourglass timer
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Time value arithmetic (minutes/seconds with carry)
//! - Timer controller driven by button events and frame ticks
//! - Display abstraction trait the controller renders through
//! - Configuration types and the embedded config parser

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod controller;
pub mod time;
pub mod traits;

pub use color::Rgb;
pub use controller::{ButtonEvent, TickCounter, TimerController};
pub use time::TimeValue;
pub use traits::TimeDisplay;
