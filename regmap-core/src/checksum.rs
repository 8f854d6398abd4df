//! Checksum and byte-order helpers
//!
//! Pure functions over values and byte ranges; nothing here writes.

use crate::traits::{EepromStorage, OutOfBounds};

/// Reverse the byte order of a 32-bit value
pub fn swap_bytes32(value: u32) -> u32 {
    ((value & 0x0000_00FF) << 24)
        | ((value & 0x0000_FF00) << 8)
        | ((value & 0x00FF_0000) >> 8)
        | ((value & 0xFF00_0000) >> 24)
}

/// Additive checksum of the `length` bytes immediately before `address`
///
/// Sums `store[address - length .. address]` and keeps the low 8 bits.
/// The window must not start before offset 0 nor end past the capacity.
pub fn checksum<S: EepromStorage + ?Sized>(
    store: &S,
    address: u32,
    length: usize,
) -> Result<u8, OutOfBounds> {
    let start = u32::try_from(length)
        .ok()
        .and_then(|len| address.checked_sub(len))
        .ok_or(OutOfBounds {
            address,
            len: length,
            capacity: store.capacity(),
        })?;

    let window = store.read(start, length)?;
    Ok(window.iter().fold(0u8, |sum, &b| sum.wrapping_add(b)))
}
