//! RP2040-specific drivers for the Hourglass timer
//!
//! - WS2812 LED strip output via PIO + DMA (shifts out frames latched by
//!   `hourglass_display::LedMatrix`)
//! - Debounced push-button input on any async-capable GPIO

#![no_std]

pub mod button;
pub mod ws2812;

pub use button::Button;
pub use ws2812::Ws2812Strip;
