//! Simple TOML parser for driver configuration
//!
//! A minimal, allocation-free parser for the subset of TOML the loader
//! config uses. It does NOT support the full TOML spec.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Integers in decimal or `0x` hex, quoted or bare
//! - [section] headers
//! - Comments (# ...), including after a value
//!
//! NOT supported:
//! - Arrays and inline tables
//! - Multi-line strings
//! - Dotted keys and nested sections

use crate::encoder::NumericPolicy;
use crate::record::parse_hex_u32;

use super::types::RegmapConfig;

/// Config parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Dump range ends before it starts
    InvalidRange,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Loader,
    Dump,
}

/// Parse TOML configuration into RegmapConfig
///
/// Sections and keys not present keep their defaults; unknown keys are
/// ignored so older firmware accepts newer config files.
pub fn parse_config(input: &str) -> Result<RegmapConfig, ConfigError> {
    let mut config = RegmapConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    if config.dump.end < config.dump.start {
        return Err(ConfigError::InvalidRange);
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "loader" => Ok(Section::Loader),
        "dump" => Ok(Section::Dump),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse an unsigned integer, decimal or `0x` hex
fn parse_u32(value: &str) -> Result<u32, ConfigError> {
    let value = parse_string(value);
    if value.starts_with("0x") || value.starts_with("0X") {
        parse_hex_u32(value).ok_or(ConfigError::InvalidValue)
    } else {
        value.parse().map_err(|_| ConfigError::InvalidValue)
    }
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_policy(value: &str) -> Result<NumericPolicy, ConfigError> {
    match parse_string(value) {
        "reject" | "Reject" => Ok(NumericPolicy::Reject),
        "zero" | "Zero" => Ok(NumericPolicy::Zero),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Apply a parsed value to the appropriate config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut RegmapConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Loader => match key {
            "max_errors" => {
                let limit = parse_u32(value)? as usize;
                config.loader.max_errors = if limit == 0 { None } else { Some(limit) };
            }
            "invalid_numeric" => config.loader.invalid_numeric = parse_policy(value)?,
            _ => {} // Ignore unknown keys
        },
        Section::Dump => match key {
            "start" => config.dump.start = parse_u32(value)?,
            "end" => config.dump.end = parse_u32(value)?,
            "skip_zero" => config.dump.skip_zero = parse_bool(value)?,
            "row_width" => {
                let width = parse_u32(value)? as usize;
                if width == 0 {
                    return Err(ConfigError::InvalidValue);
                }
                config.dump.row_width = width;
            }
            _ => {}
        },
        Section::Root => {
            // No root-level keys
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DumpConfig, LoaderConfig};

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Regmap driver settings
[loader]
max_errors = 3
invalid_numeric = "zero"   # legacy behaviour

[dump]
start = "0x1000"
end = 0x10FF
skip_zero = true
row_width = 8
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.loader.max_errors, Some(3));
        assert_eq!(config.loader.invalid_numeric, NumericPolicy::Zero);
        assert_eq!(config.dump.start, 0x1000);
        assert_eq!(config.dump.end, 0x10FF);
        assert!(config.dump.skip_zero);
        assert_eq!(config.dump.row_width, 8);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.loader, LoaderConfig::default());
        assert_eq!(config.dump, DumpConfig::default());
    }

    #[test]
    fn test_zero_max_errors_means_unlimited() {
        let config = parse_config("[loader]\nmax_errors = 0\n").unwrap();
        assert_eq!(config.loader.max_errors, None);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[dump]\ncolour = \"blue\"\nend = 4096\n").unwrap();
        assert_eq!(config.dump.end, 4096);
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert_eq!(
            parse_config("[flash]\nsize = 1\n"),
            Err(ConfigError::InvalidSection)
        );
    }

    #[test]
    fn test_bad_values_rejected() {
        assert_eq!(
            parse_config("[dump]\nskip_zero = yes\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[loader]\ninvalid_numeric = \"guess\"\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[dump]\nstart = \"0xZZ\"\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[dump]\nrow_width = 0\n"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            parse_config("[dump]\nstart = 0x20\nend = 0x10\n"),
            Err(ConfigError::InvalidRange)
        );
    }

    #[test]
    fn test_parse_key_value_keeps_hash_in_string() {
        assert_eq!(
            parse_key_value(r##"label = "a#b""##),
            Some(("label", r##""a#b""##))
        );
        assert_eq!(parse_key_value("end = 16 # trailing"), Some(("end", "16")));
        assert_eq!(parse_key_value("end ="), None);
    }
}
