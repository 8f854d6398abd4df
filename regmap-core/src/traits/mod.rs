//! Storage abstraction traits
//!
//! These traits define the interface between the encoder and whatever
//! holds the EEPROM image.

pub mod storage;

pub use storage::{EepromStorage, OutOfBounds};
