//! Configuration types and parsing
//!
//! Board-agnostic driver configuration, written as a small TOML file.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ConfigError};
pub use types::*;
