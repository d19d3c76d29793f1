//! Configuration type definitions

use crate::color::Rgb;
use crate::time::TimeValue;

/// Default frame rate (frames per second)
pub const DEFAULT_FRAME_RATE_HZ: u16 = 20;

/// Highest accepted frame rate
pub const MAX_FRAME_RATE_HZ: u16 = 100;

/// Milliseconds per timer second
const MS_PER_SECOND: u64 = 1000;

/// Count direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountMode {
    /// Count towards zero and stop there
    #[default]
    Down,
    /// Count up from the start value
    Up,
}

impl CountMode {
    /// Parse from the config file spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "down" => Some(CountMode::Down),
            "up" => Some(CountMode::Up),
            _ => None,
        }
    }
}

/// Timer section
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSettings {
    /// Frames per second; one second of time passes every this many ticks
    pub frame_rate_hz: u16,
    /// Count direction
    pub mode: CountMode,
    /// Time shown at power-on
    pub start_minutes: u32,
    pub start_seconds: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            frame_rate_hz: DEFAULT_FRAME_RATE_HZ,
            mode: CountMode::Down,
            start_minutes: 5,
            start_seconds: 1,
        }
    }
}

impl TimerSettings {
    /// Start value as a normalized time
    pub fn start(&self) -> TimeValue {
        TimeValue::new(self.start_minutes, self.start_seconds)
    }
}

/// Button steps, in seconds
///
/// A step of 60 is "+1 minute"; any other step is added to the seconds
/// and carried into minutes. Button C always resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    pub a_step_s: u32,
    pub b_step_s: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            a_step_s: 60,
            b_step_s: 30,
        }
    }
}

/// Display section
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Global matrix brightness applied once at startup (0.0-1.0)
    pub brightness: f32,
    /// Color of the minutes field
    pub minutes_color: Rgb,
    /// Color of the seconds field
    pub seconds_color: Rgb,
    /// Brightness scalar of the minutes field
    pub minutes_brightness: f32,
    /// Brightness scalar of the seconds field
    pub seconds_brightness: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: 0.3,
            minutes_color: Rgb::new(249, 82, 255),
            seconds_color: Rgb::new(5, 255, 161),
            minutes_brightness: 1.0,
            seconds_brightness: 1.0,
        }
    }
}

/// Complete timer configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerConfig {
    pub timer: TimerSettings,
    pub buttons: ButtonConfig,
    pub display: DisplayConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Config text could not be parsed
    Parse(super::ParseError),
    /// Frame rate outside 1..=MAX_FRAME_RATE_HZ, or not a whole number of
    /// milliseconds per frame
    FrameRate,
    /// Global brightness outside 0.0..=1.0
    Brightness,
    /// Start seconds of 60 or more
    StartSeconds,
}

impl From<super::ParseError> for ConfigError {
    fn from(e: super::ParseError) -> Self {
        ConfigError::Parse(e)
    }
}

impl TimerConfig {
    /// Check value ranges
    ///
    /// The frame rate must divide 1000 so that `frame_rate_hz` frames of
    /// `frame_interval_ms` add up to exactly one second.
    ///
    /// Field colors and field brightness are deliberately not checked; the
    /// renderer passes them through unclamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let hz = self.timer.frame_rate_hz;
        if hz == 0 || hz > MAX_FRAME_RATE_HZ || MS_PER_SECOND % hz as u64 != 0 {
            return Err(ConfigError::FrameRate);
        }
        if !(0.0..=1.0).contains(&self.display.brightness) {
            return Err(ConfigError::Brightness);
        }
        if self.timer.start_seconds >= 60 {
            return Err(ConfigError::StartSeconds);
        }
        Ok(())
    }

    /// Frame interval in milliseconds
    pub fn frame_interval_ms(&self) -> u64 {
        MS_PER_SECOND / self.timer.frame_rate_hz.max(1) as u64
    }
}
