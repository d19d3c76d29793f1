//! Minimal TOML parser for the timer configuration
//!
//! Handles only the subset used by `timer.toml`:
//! - `[section]` headers (`timer`, `buttons`, `display`)
//! - `key = value` pairs with integer, float, string and `[r, g, b]` values
//! - Comments (`# ...`), including trailing comments after a value
//!
//! Keys that are not present keep their default value. Other valid TOML
//! (multi-line arrays, hex integers, dotted keys, escapes) is rejected, and
//! build.rs runs this parser over `timer.toml` so such a file fails the build.

use heapless::Vec;

use super::types::{CountMode, TimerConfig};
use crate::color::Rgb;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not valid for the current section
    UnknownKey,
    /// Value has the wrong type or is out of range for its field
    InvalidValue,
    /// Line is neither a header, a key/value pair nor a comment
    MalformedLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Timer,
    Buttons,
    Display,
}

/// Parse TOML configuration into a `TimerConfig`
pub fn parse_config(input: &str) -> Result<TimerConfig, ParseError> {
    let mut config = TimerConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = line.split_once('=').ok_or(ParseError::MalformedLine)?;
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return Err(ParseError::MalformedLine);
        }

        apply_value(&mut config, section, key, value)?;
    }

    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ParseError> {
    match name.trim() {
        "timer" => Ok(Section::Timer),
        "buttons" => Ok(Section::Buttons),
        "display" => Ok(Section::Display),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    config: &mut TimerConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Timer, "frame_rate_hz") => config.timer.frame_rate_hz = parse_int(value)?,
        (Section::Timer, "mode") => {
            config.timer.mode =
                CountMode::from_name(parse_string(value)?).ok_or(ParseError::InvalidValue)?
        }
        (Section::Timer, "start_minutes") => config.timer.start_minutes = parse_int(value)?,
        (Section::Timer, "start_seconds") => config.timer.start_seconds = parse_int(value)?,

        (Section::Buttons, "a_step_s") => config.buttons.a_step_s = parse_int(value)?,
        (Section::Buttons, "b_step_s") => config.buttons.b_step_s = parse_int(value)?,

        (Section::Display, "brightness") => config.display.brightness = parse_float(value)?,
        (Section::Display, "minutes_color") => config.display.minutes_color = parse_rgb(value)?,
        (Section::Display, "seconds_color") => config.display.seconds_color = parse_rgb(value)?,
        (Section::Display, "minutes_brightness") => {
            config.display.minutes_brightness = parse_float(value)?
        }
        (Section::Display, "seconds_brightness") => {
            config.display.seconds_brightness = parse_float(value)?
        }

        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    for (i, ch) in line.char_indices() {
        match (ch, quote) {
            ('"' | '\'', None) => quote = Some(ch),
            (c, Some(q)) if c == q => quote = None,
            ('#', None) => return &line[..i],
            _ => {}
        }
    }
    line
}

fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    // TOML allows `1_000` style digit separators
    let mut digits: heapless::String<24> = heapless::String::new();
    for ch in value.chars().filter(|c| *c != '_') {
        digits.push(ch).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_float(value: &str) -> Result<f32, ParseError> {
    let v: f32 = value.parse().map_err(|_| ParseError::InvalidValue)?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Basic (`"..."`) or literal (`'...'`) string without escapes
fn parse_string(value: &str) -> Result<&str, ParseError> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .ok_or(ParseError::InvalidValue)
}

fn parse_rgb(value: &str) -> Result<Rgb, ParseError> {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .ok_or(ParseError::InvalidValue)?;

    let mut channels: Vec<u8, 3> = Vec::new();
    for part in inner.split(',') {
        let part = part.trim();
        if part.is_empty() {
            // Trailing comma
            continue;
        }
        channels
            .push(parse_int(part)?)
            .map_err(|_| ParseError::InvalidValue)?;
    }

    channels
        .into_array::<3>()
        .map(Rgb::from)
        .map_err(|_| ParseError::InvalidValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::TimerSettings;

    const SAMPLE: &str = r#"
# Hourglass timer configuration

[timer]
frame_rate_hz = 20
mode = "down"      # or "up"
start_minutes = 5
start_seconds = 1

[buttons]
a_step_s = 60
b_step_s = 30

[display]
brightness = 0.3
minutes_color = [249, 82, 255]
seconds_color = [5, 255, 161]
minutes_brightness = 1.0
seconds_brightness = 1.0
"#;

    #[test]
    fn test_sample_matches_defaults() {
        let config = parse_config(SAMPLE).unwrap();
        assert_eq!(config, TimerConfig::default());
    }

    #[test]
    fn test_empty_input_is_default() {
        assert_eq!(parse_config("").unwrap(), TimerConfig::default());
    }

    #[test]
    fn test_one_hertz_variant() {
        let input = "[timer]\nframe_rate_hz = 1\nmode = \"up\"\n[buttons]\na_step_s = 3\nb_step_s = 60\n";
        let config = parse_config(input).unwrap();
        assert_eq!(
            config.timer,
            TimerSettings {
                frame_rate_hz: 1,
                mode: CountMode::Up,
                ..TimerSettings::default()
            }
        );
        assert_eq!(config.buttons.a_step_s, 3);
        assert_eq!(config.buttons.b_step_s, 60);
    }

    #[test]
    fn test_underscored_integer() {
        let config = parse_config("[timer]\nstart_minutes = 1_000\n").unwrap();
        assert_eq!(config.timer.start_minutes, 1000);
    }

    #[test]
    fn test_unknown_section() {
        assert_eq!(parse_config("[alarm]\n"), Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_key_outside_section() {
        assert_eq!(
            parse_config("brightness = 0.5\n"),
            Err(ParseError::UnknownKey)
        );
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            parse_config("[timer]\nframe_rate_hz = fast\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[timer]\nmode = down\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nminutes_color = [1, 2]\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nseconds_color = [1, 2, 300]\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\nbrightness = inf\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_malformed_line() {
        assert_eq!(
            parse_config("[timer]\nframe_rate_hz\n"),
            Err(ParseError::MalformedLine)
        );
    }

    #[test]
    fn test_hash_inside_string_is_kept() {
        assert_eq!(strip_comment(r##"mode = "#up" # c"##), r##"mode = "#up" "##);
        assert_eq!(strip_comment("mode = '#up' # c"), "mode = '#up' ");
    }

    #[test]
    fn test_literal_string() {
        let config = parse_config("[timer]\nmode = 'up'\n").unwrap();
        assert_eq!(config.timer.mode, CountMode::Up);
    }

    #[test]
    fn test_multiline_array_rejected() {
        let input = "[display]\nminutes_color = [\n 249,\n 82,\n 255,\n]\n";
        assert_eq!(parse_config(input), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_hex_integer_rejected() {
        assert_eq!(
            parse_config("[timer]\nstart_minutes = 0x0A\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_dotted_key_rejected() {
        assert_eq!(
            parse_config("[timer]\ntimer.start_minutes = 9\n"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(
            parse_config("timer.start_minutes = 9\n"),
            Err(ParseError::UnknownKey)
        );
    }

    #[test]
    fn test_trailing_comma_color() {
        let config = parse_config("[display]\nseconds_color = [1, 2, 3,]\n").unwrap();
        assert_eq!(config.display.seconds_color, Rgb::new(1, 2, 3));
    }
}
