//! RGB color type shared by the renderer and the LED sinks

/// 8-bit per channel RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREY: Rgb = Rgb::new(128, 128, 128);

    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Multiply each channel by `factor`, truncating towards zero
    ///
    /// The factor is not clamped. Float to integer casts saturate, so a
    /// factor above 1.0 pins channels at 255 and a negative factor yields 0.
    pub fn scale(self, factor: f32) -> Self {
        Self {
            r: (self.r as f32 * factor) as u8,
            g: (self.g as f32 * factor) as u8,
            b: (self.b as f32 * factor) as u8,
        }
    }

    /// Check if every channel is zero
    pub fn is_off(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_floors() {
        let c = Rgb::new(249, 82, 255).scale(0.5);
        assert_eq!(c, Rgb::new(124, 41, 127));
    }

    #[test]
    fn test_scale_identity_and_zero() {
        let c = Rgb::new(5, 255, 161);
        assert_eq!(c.scale(1.0), c);
        assert!(c.scale(0.0).is_off());
    }

    #[test]
    fn test_scale_out_of_range_saturates() {
        assert_eq!(Rgb::new(200, 10, 0).scale(2.0), Rgb::new(255, 20, 0));
        assert_eq!(Rgb::new(200, 10, 0).scale(-1.0), Rgb::BLACK);
    }
}
