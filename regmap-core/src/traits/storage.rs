//! Byte-addressed storage trait

use core::ops::Range;

/// An access fell outside the store
///
/// Carries the requested range so the caller can report it without
/// re-running the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfBounds {
    /// First address of the requested range
    pub address: u32,
    /// Requested length in bytes
    pub len: usize,
    /// Capacity of the store that rejected it
    pub capacity: usize,
}

/// Resolve `address..address + len` against a store of `capacity` bytes
///
/// Fails if any byte of the range lies at or past `capacity`, including
/// when the end overflows.
pub fn checked_range(
    address: u32,
    len: usize,
    capacity: usize,
) -> Result<Range<usize>, OutOfBounds> {
    let err = OutOfBounds {
        address,
        len,
        capacity,
    };
    let start = usize::try_from(address).map_err(|_| err)?;
    let end = start.checked_add(len).ok_or(err)?;
    if end > capacity {
        return Err(err);
    }
    Ok(start..end)
}

/// Bounds-checked byte storage
///
/// Every write the encoder performs goes through this trait. Implementations
/// must check the whole range before touching any byte, so a rejected write
/// leaves the storage unchanged.
pub trait EepromStorage {
    /// Total addressable bytes
    fn capacity(&self) -> usize;

    /// Borrow `len` bytes starting at `address`
    fn read(&self, address: u32, len: usize) -> Result<&[u8], OutOfBounds>;

    /// Copy `bytes` into the storage starting at `address`
    fn write(&mut self, address: u32, bytes: &[u8]) -> Result<(), OutOfBounds>;

    /// Read a single byte
    fn read_byte(&self, address: u32) -> Result<u8, OutOfBounds> {
        self.read(address, 1).map(|b| b[0])
    }
}
