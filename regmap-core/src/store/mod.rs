//! Simulated EEPROM backing store
//!
//! A fixed-capacity, zero-initialised byte array owned by the driver and
//! lent to the encoder one write at a time.

pub mod backing;
pub mod dump;

pub use backing::BackingStore;
pub use dump::{Dump, DumpMode, DumpRow, Rows};
