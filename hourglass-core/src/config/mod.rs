//! Configuration types
//!
//! The firmware embeds a small TOML file and parses it at boot with
//! [`parse_config`]. Anything missing falls back to the defaults below.

pub mod parser;
pub mod types;

pub use parser::{parse_config, ParseError};
pub use types::*;
