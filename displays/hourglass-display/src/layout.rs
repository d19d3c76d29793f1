//! Fixed frame layout
//!
//! ```text
//!  x  0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
//!     . M M M . M M M : S S  S  .  S  S  S  .
//! ```
//!
//! Four 3x5 glyph slots at y = 1, each 4 pixels wide (digit + 1 spacing),
//! with a two-pixel colon in the gap between the minutes and seconds.

use hourglass_core::Rgb;

use crate::font::{GLYPH_HEIGHT, GLYPH_WIDTH};

/// Horizontal pitch between slots
pub const SLOT_WIDTH: u8 = GLYPH_WIDTH as u8 + 1;

/// Top row of every glyph
pub const DIGIT_Y: u8 = 1;

/// Left edge of the first slot
pub const FIRST_SLOT_X: u8 = 1;

/// Colon pixels between the two fields
pub const COLON_PIXELS: [(u8, u8); 2] = [(8, 2), (8, 4)];

/// Colon color, independent of field color and brightness
pub const COLON_COLOR: Rgb = Rgb::RED;

/// Smallest grid the layout fits on
pub const MIN_WIDTH: u8 = FIRST_SLOT_X + 3 * SLOT_WIDTH + GLYPH_WIDTH as u8;
pub const MIN_HEIGHT: u8 = DIGIT_Y + GLYPH_HEIGHT as u8 + 1;

/// Which of the two rendered numbers a slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Minutes (left)
    Left,
    /// Seconds (right)
    Right,
}

/// One of the four glyph slots, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    LeftTens,
    LeftOnes,
    RightTens,
    RightOnes,
}

impl Slot {
    /// All slots in drawing order
    pub const ALL: [Slot; 4] = [Slot::LeftTens, Slot::LeftOnes, Slot::RightTens, Slot::RightOnes];

    fn index(self) -> u8 {
        match self {
            Slot::LeftTens => 0,
            Slot::LeftOnes => 1,
            Slot::RightTens => 2,
            Slot::RightOnes => 3,
        }
    }

    /// Top-left pixel of the slot
    pub fn origin(self) -> (u8, u8) {
        (FIRST_SLOT_X + self.index() * SLOT_WIDTH, DIGIT_Y)
    }

    /// Field this slot renders
    pub fn field(self) -> Field {
        match self {
            Slot::LeftTens | Slot::LeftOnes => Field::Left,
            Slot::RightTens | Slot::RightOnes => Field::Right,
        }
    }

    /// Digit of `value` shown in this slot
    ///
    /// Only the last two decimal digits are shown, so 123 renders as "23".
    pub fn digit_of(self, value: u32) -> u8 {
        match self {
            Slot::LeftTens | Slot::RightTens => ((value / 10) % 10) as u8,
            Slot::LeftOnes | Slot::RightOnes => (value % 10) as u8,
        }
    }
}
