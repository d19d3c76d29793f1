//! Build script for hourglass-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Checks timer.toml with the same parser and validation the firmware
//!   runs at boot, so a config that builds is a config that loads

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use hourglass_core::config::parse_config;

/// Inner width of the error box
const BOX_WIDTH: usize = 64;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    File::create(out_dir.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate timer.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=timer.toml");

    let text = match fs::read_to_string("timer.toml") {
        Ok(text) => text,
        Err(e) => fail("Failed to read timer.toml", &e.to_string()),
    };

    // Full TOML first, for line/column diagnostics on plain syntax errors
    if let Err(e) = toml::from_str::<toml::Value>(&text) {
        fail("Invalid TOML syntax in timer.toml", &e.to_string());
    }

    let config = match parse_config(&text) {
        Ok(config) => config,
        Err(e) => fail(
            "timer.toml uses TOML the firmware cannot read",
            &format!(
                "{:?} on line {}\nUse one `key = value` per line, decimal\nintegers, \"strings\" and single-line [r, g, b] arrays.",
                e,
                first_failing_line(&text)
            ),
        ),
    };

    if let Err(e) = config.validate() {
        fail(
            "Invalid timer configuration",
            &format!(
                "{:?}\nframe_rate_hz must divide 1000 (max 100), brightness\nmust be 0.0-1.0 and start_seconds below 60.",
                e
            ),
        );
    }

    println!("cargo:warning=timer.toml validated successfully");
}

/// 1-based number of the first line that makes the parser fail
fn first_failing_line(text: &str) -> usize {
    let mut end = 0;
    for (number, line) in text.split_inclusive('\n').enumerate() {
        end += line.len();
        if parse_config(&text[..end]).is_err() {
            return number + 1;
        }
    }
    text.lines().count()
}

/// Abort the build with a boxed message
fn fail(title: &str, detail: &str) -> ! {
    let rule = "═".repeat(BOX_WIDTH + 2);
    panic!(
        "\n╔{rule}╗\n{}\n╠{rule}╣\n{}\n╚{rule}╝\n",
        box_line(&format!("ERROR: {}", title)),
        detail.lines().map(box_line).collect::<Vec<_>>().join("\n"),
    );
}

/// One padded line of the box, cut on a character boundary
fn box_line(line: &str) -> String {
    let text = if line.chars().count() > BOX_WIDTH {
        format!("{}...", line.chars().take(BOX_WIDTH - 3).collect::<String>())
    } else {
        line.to_string()
    };
    format!("║ {:<width$} ║", text, width = BOX_WIDTH)
}
