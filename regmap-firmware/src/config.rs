//! Configuration loading
//!
//! Parses the TOML config embedded in the firmware image. Falls back to
//! built-in defaults if it does not parse.

use defmt::*;

use regmap_core::config::{parse_config, RegmapConfig};

/// Parse the embedded configuration
///
/// build.rs validates the same text, so the fallback only triggers when
/// the firmware parser and the build-time check disagree.
pub fn load_embedded(text: &str) -> RegmapConfig {
    match parse_config(text) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {:?}", e);
            error!("Using default configuration");
            RegmapConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &RegmapConfig) {
    match config.loader.max_errors {
        Some(limit) => debug!("  abort after {} errors", limit),
        None => debug!("  never abort a batch"),
    }
    debug!("  invalid numeric values: {:?}", config.loader.invalid_numeric);
    debug!(
        "  dump {=u32:#x}..={=u32:#x}, skip_zero={}",
        config.dump.start, config.dump.end, config.dump.skip_zero
    );
}
