//! In-memory LED matrix
//!
//! A 17x7 RGB grid wired as a single serpentine strip: even rows run left
//! to right, odd rows right to left. Pixel writes go to a back buffer;
//! `present` latches one complete strip-ordered frame with the global
//! brightness applied, which the chip-specific driver then shifts out.

use hourglass_core::Rgb;

use crate::backend::{PixelSink, SinkError};

/// Matrix width in pixels
pub const WIDTH: usize = 17;

/// Matrix height in pixels
pub const HEIGHT: usize = 7;

/// Number of LEDs on the strip
pub const LED_COUNT: usize = WIDTH * HEIGHT;

/// One frame in strip order
pub type Frame = [Rgb; LED_COUNT];

/// Strip position of the pixel at (x, y)
pub const fn strip_index(x: usize, y: usize) -> usize {
    if y % 2 == 0 {
        y * WIDTH + x
    } else {
        y * WIDTH + (WIDTH - 1 - x)
    }
}

/// Framebuffer for a serpentine-wired LED matrix
pub struct LedMatrix {
    back: [[Rgb; WIDTH]; HEIGHT],
    brightness: f32,
    latched: Option<Frame>,
    presented: u32,
}

impl Default for LedMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl LedMatrix {
    /// Create a dark matrix at full brightness
    pub const fn new() -> Self {
        Self {
            back: [[Rgb::BLACK; WIDTH]; HEIGHT],
            brightness: 1.0,
            latched: None,
            presented: 0,
        }
    }

    /// Read a pixel from the back buffer
    pub fn pixel(&self, x: u8, y: u8) -> Option<Rgb> {
        self.back
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    /// Take the most recently presented frame, if it has not been taken yet
    pub fn take_frame(&mut self) -> Option<Frame> {
        self.latched.take()
    }

    /// Number of frames presented since creation
    pub fn frames_presented(&self) -> u32 {
        self.presented
    }

    /// Current global brightness
    pub fn brightness(&self) -> f32 {
        self.brightness
    }
}

impl PixelSink for LedMatrix {
    fn set_pixel(&mut self, x: u8, y: u8, color: Rgb) -> Result<(), SinkError> {
        let cell = self
            .back
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
            .ok_or(SinkError::OutOfBounds)?;
        *cell = color;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SinkError> {
        self.back = [[Rgb::BLACK; WIDTH]; HEIGHT];
        Ok(())
    }

    fn present(&mut self) -> Result<(), SinkError> {
        let mut frame = [Rgb::BLACK; LED_COUNT];
        for (y, row) in self.back.iter().enumerate() {
            for (x, color) in row.iter().enumerate() {
                frame[strip_index(x, y)] = color.scale(self.brightness);
            }
        }
        // An untaken frame is superseded; the driver only ever wants the newest
        self.latched = Some(frame);
        self.presented = self.presented.wrapping_add(1);
        Ok(())
    }

    fn shape(&self) -> (u8, u8) {
        (WIDTH as u8, HEIGHT as u8)
    }

    fn set_brightness(&mut self, brightness: f32) -> Result<(), SinkError> {
        self.brightness = brightness;
        Ok(())
    }
}
