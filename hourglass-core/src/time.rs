//! Minutes/seconds time value
//!
//! Seconds are always kept in `0..=59` by carrying into or out of minutes.
//! Minutes have no upper bound besides the integer width; the display
//! only shows their last two decimal digits.

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u32 = 60;

/// A normalized (minutes, seconds) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeValue {
    minutes: u32,
    seconds: u8,
}

impl TimeValue {
    /// The zero time
    pub const ZERO: TimeValue = TimeValue {
        minutes: 0,
        seconds: 0,
    };

    /// Create a time value, carrying excess seconds into minutes
    pub fn new(minutes: u32, seconds: u32) -> Self {
        Self::ZERO.add_seconds(seconds).add_minutes(minutes)
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Check if both fields are zero
    pub fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }

    /// Add whole minutes, saturating at `u32::MAX`
    pub fn add_minutes(self, minutes: u32) -> Self {
        Self {
            minutes: self.minutes.saturating_add(minutes),
            seconds: self.seconds,
        }
    }

    /// Add seconds and carry every full 60 into minutes
    ///
    /// When minutes are already saturated the seconds saturate at 59.
    pub fn add_seconds(self, seconds: u32) -> Self {
        let total = self.seconds as u32 + seconds % SECONDS_PER_MINUTE;
        let carry = seconds / SECONDS_PER_MINUTE + total / SECONDS_PER_MINUTE;

        match self.minutes.checked_add(carry) {
            Some(minutes) => Self {
                minutes,
                seconds: (total % SECONDS_PER_MINUTE) as u8,
            },
            None => Self {
                minutes: u32::MAX,
                seconds: 59,
            },
        }
    }

    /// Remove one second, borrowing from minutes
    ///
    /// At zero this is a no-op: time never goes negative and never wraps.
    pub fn decrement(self) -> Self {
        if self.seconds > 0 {
            Self {
                minutes: self.minutes,
                seconds: self.seconds - 1,
            }
        } else if self.minutes > 0 {
            Self {
                minutes: self.minutes - 1,
                seconds: 59,
            }
        } else {
            self
        }
    }

    /// Add one second with carry
    pub fn increment(self) -> Self {
        self.add_seconds(1)
    }

    /// Total length in seconds
    pub fn total_seconds(&self) -> u64 {
        self.minutes as u64 * SECONDS_PER_MINUTE as u64 + self.seconds as u64
    }
}
