//! Pixel-level display for the Hourglass timer
//!
//! This crate provides:
//! - `PixelSink` trait for LED matrices and other per-pixel outputs
//! - A 3x5 bitmap font for the digits 0-9
//! - `Display`, which composes a `minutes:seconds` frame onto a sink
//! - `LedMatrix`, an in-memory 17x7 sink that latches strip-ordered frames
//!
//! # Architecture
//!
//! `Display` implements `hourglass_core::TimeDisplay`, so the timer
//! controller renders through it without knowing the output hardware.
//! Chip-specific crates move the frames latched by `LedMatrix` onto the
//! physical LEDs.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod font;
pub mod layout;
pub mod matrix;
pub mod renderer;

// Re-export key types
pub use backend::{PixelSink, SinkError};
pub use font::{glyph, FontError, Glyph};
pub use matrix::{Frame, LedMatrix};
pub use renderer::{Display, DisplayError, DisplayState};
