//! Hourglass - LED Matrix Countdown Timer Firmware
//!
//! Main firmware binary for RP2040-based boards driving a 17x7 WS2812
//! matrix with three push-buttons.
//!
//! - Button A adds a minute, button B adds half a minute, button C resets
//! - The display shows `MM:SS` and refreshes once per frame
//! - One second of time passes every `frame_rate_hz` frames

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::PioWs2812Program;
use {defmt_rtt as _, panic_probe as _};

use hourglass_core::{ButtonEvent, TimerController};
use hourglass_display::{Display, LedMatrix};
use hourglass_hal_rp2040::{Button, Ws2812Strip};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hourglass firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();

    // Setup PIO0 for the WS2812 matrix
    // Data pin is board-specific (GPIO16)
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let strip = Ws2812Strip::new(&mut common, sm0, p.DMA_CH0, p.PIN_16, &program);
    info!("WS2812 strip initialized");

    // Build the display over the in-memory matrix
    let mut display = match Display::new(LedMatrix::new()) {
        Ok(display) => display,
        Err(e) => defmt::panic!("Display init failed: {:?}", e),
    };
    if let Err(e) = display.apply_config(&config.display) {
        defmt::panic!("Display config rejected: {:?}", e);
    }

    let controller = TimerController::new(&config);
    controller.prime(&mut display);
    let start = controller.time();
    info!(
        "Timer starts at {}:{} ({:?})",
        start.minutes(),
        start.seconds(),
        config.timer.mode
    );

    // Buttons are active-low with internal pull-ups
    // Pin assignments are board-specific (A=GPIO17, B=GPIO22, C=GPIO6)
    let button_a = Button::new(Input::new(p.PIN_17, Pull::Up));
    let button_b = Button::new(Input::new(p.PIN_22, Pull::Up));
    let button_c = Button::new(Input::new(p.PIN_6, Pull::Up));

    // Spawn tasks
    spawner.spawn(tasks::strip_task(strip)).unwrap();
    spawner
        .spawn(tasks::button_task(button_a, ButtonEvent::A))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_b, ButtonEvent::B))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_c, ButtonEvent::C))
        .unwrap();
    spawner
        .spawn(tasks::tick_task(
            display,
            controller,
            config.frame_interval_ms(),
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // The PIO common block and the loaded program stay owned here, so the
    // main task must never return
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
