//! PIO-driven WS2812 strip output
//!
//! Uses the WS2812 program shipped with embassy-rp. The PIO state machine
//! generates the bit timing and DMA feeds it, so writing a frame costs the
//! CPU only the color conversion.
//!
//! # Wiring
//!
//! The matrix is one serpentine strip of `LED_COUNT` pixels on a single
//! data pin. `LedMatrix` has already put the frame in strip order.

use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::Peri;
use smart_leds::RGB8;

use hourglass_core::Rgb;
use hourglass_display::matrix::{Frame, LED_COUNT};

/// Convert a renderer color to the strip color type
pub fn to_rgb8(color: Rgb) -> RGB8 {
    RGB8::new(color.r, color.g, color.b)
}

/// WS2812 strip sized for the timer matrix
pub struct Ws2812Strip<'d, P: Instance, const S: usize> {
    leds: PioWs2812<'d, P, S, LED_COUNT>,
    buffer: [RGB8; LED_COUNT],
}

impl<'d, P: Instance, const S: usize> Ws2812Strip<'d, P, S> {
    /// Claim a state machine, DMA channel and data pin for the strip
    ///
    /// `program` must already be loaded into `common`; several strips can
    /// share it.
    pub fn new(
        common: &mut Common<'d, P>,
        sm: StateMachine<'d, P, S>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
        program: &PioWs2812Program<'d, P>,
    ) -> Self {
        Self {
            leds: PioWs2812::new(common, sm, dma, pin, program),
            buffer: [RGB8::default(); LED_COUNT],
        }
    }

    /// Shift one frame out to the LEDs
    pub async fn write(&mut self, frame: &Frame) {
        for (out, color) in self.buffer.iter_mut().zip(frame.iter()) {
            *out = to_rgb8(*color);
        }
        self.leds.write(&self.buffer).await;
    }

    /// Turn every LED off
    pub async fn blank(&mut self) {
        self.buffer = [RGB8::default(); LED_COUNT];
        self.leds.write(&self.buffer).await;
    }
}
