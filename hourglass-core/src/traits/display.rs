//! Display trait the timer controller renders through

/// A display that shows a two-field time value
///
/// The controller only ever borrows the display for the duration of a
/// call; ownership stays with whoever composed the system.
pub trait TimeDisplay {
    /// Error reported when a frame cannot be produced
    type Error;

    /// Store the two field values to render on the next frame
    fn set_digits(&mut self, left: u32, right: u32);

    /// Store the four auxiliary indicator-light brightness values
    fn set_light_brightness(&mut self, red: f32, green: f32, blue: f32, yellow: f32);

    /// Compose and present exactly one frame showing `minutes:seconds`
    fn update(&mut self, minutes: u32, seconds: u8) -> Result<(), Self::Error>;
}
