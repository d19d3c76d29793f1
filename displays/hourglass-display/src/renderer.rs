//! Frame composition
//!
//! Draws the two time fields and the colon onto a `PixelSink` and presents
//! the result as a single frame.

use hourglass_core::config::DisplayConfig;
use hourglass_core::{Rgb, TimeDisplay};

use crate::backend::{PixelSink, SinkError};
use crate::font::{self, FontError};
use crate::layout::{Field, Slot, COLON_COLOR, COLON_PIXELS, MIN_HEIGHT, MIN_WIDTH};

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The pixel sink rejected an operation
    Sink(SinkError),
    /// A digit outside 0..=9 reached the font
    InvalidDigit(u8),
    /// The sink grid cannot fit the layout
    GridTooSmall { width: u8, height: u8 },
}

impl From<SinkError> for DisplayError {
    fn from(e: SinkError) -> Self {
        DisplayError::Sink(e)
    }
}

impl From<FontError> for DisplayError {
    fn from(e: FontError) -> Self {
        match e {
            FontError::InvalidDigit(d) => DisplayError::InvalidDigit(d),
        }
    }
}

/// Auxiliary indicator-light brightness
///
/// Stored only; the timer layout has no pixels for them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorLights {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub yellow: f32,
}

/// Everything the next frame is composed from
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// Left field value (minutes)
    pub left: u32,
    /// Right field value (seconds)
    pub right: u32,
    pub left_color: Rgb,
    pub right_color: Rgb,
    pub left_brightness: f32,
    pub right_brightness: f32,
    pub lights: IndicatorLights,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            left: 0,
            right: 0,
            left_color: Rgb::GREY,
            right_color: Rgb::GREY,
            left_brightness: 1.0,
            right_brightness: 1.0,
            lights: IndicatorLights::default(),
        }
    }
}

impl DisplayState {
    /// Field color with the field brightness applied
    pub fn field_color(&self, field: Field) -> Rgb {
        match field {
            Field::Left => self.left_color.scale(self.left_brightness),
            Field::Right => self.right_color.scale(self.right_brightness),
        }
    }

    /// Value shown in a field
    pub fn field_value(&self, field: Field) -> u32 {
        match field {
            Field::Left => self.left,
            Field::Right => self.right,
        }
    }
}

/// Two-field time renderer over a pixel sink
///
/// Owns both the sink and the display state for the life of the program.
pub struct Display<S> {
    sink: S,
    state: DisplayState,
}

impl<S: PixelSink> Display<S> {
    /// Wrap a sink, rejecting grids the layout does not fit on
    pub fn new(sink: S) -> Result<Self, DisplayError> {
        let (width, height) = sink.shape();
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(DisplayError::GridTooSmall { width, height });
        }

        Ok(Self {
            sink,
            state: DisplayState::default(),
        })
    }

    /// Apply field colors, field brightness and the global brightness
    pub fn apply_config(&mut self, config: &DisplayConfig) -> Result<(), DisplayError> {
        self.set_digit_color(config.minutes_color, config.seconds_color);
        self.set_digit_brightness(config.minutes_brightness, config.seconds_brightness);
        self.set_global_brightness(config.brightness)
    }

    /// Turn the whole grid off without presenting
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.sink.clear()?;
        Ok(())
    }

    /// Store the field values for the next frame
    pub fn set_digits(&mut self, left: u32, right: u32) {
        self.state.left = left;
        self.state.right = right;
    }

    /// Store minutes and seconds for the next frame
    pub fn set_time(&mut self, minutes: u32, seconds: u8) {
        self.set_digits(minutes, seconds as u32);
    }

    /// Store per-field brightness; not clamped
    pub fn set_digit_brightness(&mut self, left: f32, right: f32) {
        self.state.left_brightness = left;
        self.state.right_brightness = right;
    }

    /// Store per-field colors
    pub fn set_digit_color(&mut self, left: Rgb, right: Rgb) {
        self.state.left_color = left;
        self.state.right_color = right;
    }

    /// Store the indicator-light brightness values
    pub fn set_light_brightness(&mut self, red: f32, green: f32, blue: f32, yellow: f32) {
        self.state.lights = IndicatorLights {
            red,
            green,
            blue,
            yellow,
        };
    }

    /// Forward a global brightness scalar to the sink
    pub fn set_global_brightness(&mut self, brightness: f32) -> Result<(), DisplayError> {
        self.sink.set_brightness(brightness)?;
        Ok(())
    }

    /// Compose and present one frame showing `minutes:seconds`
    ///
    /// All pixel writes happen before the single `present` call, so a
    /// failure part way through never shows a partial frame.
    pub fn update(&mut self, minutes: u32, seconds: u8) -> Result<(), DisplayError> {
        self.set_time(minutes, seconds);

        for slot in Slot::ALL {
            let field = slot.field();
            let digit = slot.digit_of(self.state.field_value(field));
            self.draw_digit(slot, digit, self.state.field_color(field))?;
        }
        self.draw_colon()?;

        self.sink.present()?;
        Ok(())
    }

    fn draw_digit(&mut self, slot: Slot, digit: u8, color: Rgb) -> Result<(), DisplayError> {
        let glyph = font::glyph(digit)?;
        let (x, y) = slot.origin();
        for (dx, dy) in glyph.lit_cells() {
            self.sink.set_pixel(x + dx, y + dy, color)?;
        }
        Ok(())
    }

    fn draw_colon(&mut self) -> Result<(), DisplayError> {
        for (x, y) in COLON_PIXELS {
            self.sink.set_pixel(x, y, COLON_COLOR)?;
        }
        Ok(())
    }

    /// Current display state
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: PixelSink> TimeDisplay for Display<S> {
    type Error = DisplayError;

    fn set_digits(&mut self, left: u32, right: u32) {
        Display::set_digits(self, left, right);
    }

    fn set_light_brightness(&mut self, red: f32, green: f32, blue: f32, yellow: f32) {
        Display::set_light_brightness(self, red, green, blue, yellow);
    }

    fn update(&mut self, minutes: u32, seconds: u8) -> Result<(), DisplayError> {
        Display::update(self, minutes, seconds)
    }
}
