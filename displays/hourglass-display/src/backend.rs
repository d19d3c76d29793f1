//! Pixel sink trait
//!
//! Defines the interface for per-pixel color outputs such as LED matrices.

use hourglass_core::Rgb;

/// Pixel sink errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SinkError {
    /// Output device failed to initialize or stopped responding
    Unavailable,
    /// Pixel coordinates outside the grid
    OutOfBounds,
}

/// Pixel sink trait
///
/// Writes are buffered by the implementation; nothing becomes visible
/// until `present` is called.
pub trait PixelSink {
    /// Set the color of the pixel at (x, y)
    fn set_pixel(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), SinkError>;

    /// Turn every pixel off
    ///
    /// Does not present the cleared frame.
    fn clear(&mut self) -> Result<(), SinkError>;

    /// Make the buffered pixels visible as one frame
    fn present(&mut self) -> Result<(), SinkError>;

    /// Get the grid dimensions as (width, height)
    fn shape(&self) -> (u8, u8);

    /// Set the global brightness scalar (0.0-1.0)
    fn set_brightness(&mut self, brightness: f32) -> Result<(), SinkError>;
}
