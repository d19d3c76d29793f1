//! Embedded timer configuration
//!
//! `timer.toml` is compiled into the image. build.rs runs the same parse and
//! validation on the host, so the fallback to the built-in defaults below
//! only guards against the two drifting apart.

use defmt::*;

use hourglass_core::config::{parse_config, TimerConfig};

/// Embedded configuration (compiled into firmware)
/// Edit timer.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../timer.toml");

/// Parse and validate the embedded configuration
pub fn load() -> TimerConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse timer.toml: {:?}, using defaults", e);
            return TimerConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        warn!("Invalid timer.toml: {:?}, using defaults", e);
        return TimerConfig::default();
    }

    info!(
        "Config: {} Hz, {:?}, start {}:{}, A +{}s, B +{}s",
        config.timer.frame_rate_hz,
        config.timer.mode,
        config.timer.start_minutes,
        config.timer.start_seconds,
        config.buttons.a_step_s,
        config.buttons.b_step_s
    );
    config
}
