//! Board-agnostic core logic for the Regmap EEPROM loader
//!
//! This crate contains everything that turns register-definition text into
//! bytes inside a simulated EEPROM, without depending on a target:
//!
//! - Backing store and dump/read-back helpers
//! - Record parser for `name,address,type,value,length,endianness` lines
//! - Per-type encoder (float, int, string, hex, checksum)
//! - Checksum and byte-order helpers
//! - Batch loader with error policy and summary report
//! - Configuration type definitions and the TOML subset parser
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌─────────────┐   ┌───────────────┐
//! │ CSV line │──▶│ parse_record │──▶│   encode    │──▶│ BackingStore  │
//! └──────────┘   └──────────────┘   └─────────────┘   └───────────────┘
//!                   ParseFailure      EncodeError        OutOfBounds
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod checksum;
pub mod config;
pub mod encoder;
pub mod loader;
pub mod record;
pub mod store;
pub mod traits;

pub use checksum::{checksum, swap_bytes32};
pub use encoder::{encode, EncodeError, WriteSummary};
pub use loader::{LoadEvent, LoadReport, Loader};
pub use record::{parse_record, ParseError, ParseFailure, Record, RecordType, TypeTag};
pub use store::{BackingStore, DumpMode};
pub use traits::{EepromStorage, OutOfBounds};
