//! Configuration type definitions
//!
//! These types describe how the driver runs a load. The firmware embeds
//! them as TOML text and parses them with [`super::parse_config`].

use core::ops::RangeInclusive;

use crate::encoder::NumericPolicy;
use crate::store::DumpMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default width of a hex-dump row
pub const DEFAULT_ROW_WIDTH: usize = 16;

/// Batch loader policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoaderConfig {
    /// Stop the batch once this many lines have failed (None = never)
    pub max_errors: Option<usize>,
    /// Handling of value text that does not parse as a number
    pub invalid_numeric: NumericPolicy,
}

/// Read-back range logged after a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DumpConfig {
    /// First address to dump
    pub start: u32,
    /// Last address to dump (inclusive)
    pub end: u32,
    /// Report non-zero bytes only
    pub skip_zero: bool,
    /// Bytes per logged row
    pub row_width: usize,
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            start: 0x1000,
            end: 0x101F,
            skip_zero: false,
            row_width: DEFAULT_ROW_WIDTH,
        }
    }
}

impl DumpConfig {
    /// Inclusive address range
    pub fn range(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn mode(&self) -> DumpMode {
        DumpMode::from_skip_zero(self.skip_zero)
    }
}

/// Complete driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegmapConfig {
    pub loader: LoaderConfig,
    pub dump: DumpConfig,
}

impl RegmapConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
