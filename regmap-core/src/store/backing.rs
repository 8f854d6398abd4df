//! Fixed-size in-memory store

use core::ops::RangeInclusive;

use crate::traits::storage::checked_range;
use crate::traits::{EepromStorage, OutOfBounds};

use super::dump::{Dump, DumpMode, Rows};

/// Zero-initialised byte array standing in for an EEPROM
///
/// `N` is the whole simulated address space. There is no erase state:
/// unwritten bytes read back as `0x00`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackingStore<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> Default for BackingStore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> BackingStore<N> {
    /// Create a zeroed store
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// The whole image
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Zero every byte
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Resolve an inclusive address range to a slice of the image
    fn span(&self, range: &RangeInclusive<u32>) -> Result<(u32, &[u8]), OutOfBounds> {
        let (start, end) = (*range.start(), *range.end());
        if end < start {
            return Ok((start, &self.bytes[..0]));
        }
        let len = ((end - start) as usize)
            .checked_add(1)
            .ok_or(OutOfBounds {
                address: start,
                len: usize::MAX,
                capacity: N,
            })?;
        let span = checked_range(start, len, N)?;
        Ok((start, &self.bytes[span]))
    }

    /// Iterate `(address, byte)` over `range`
    ///
    /// The range is inclusive on both ends. An empty range (`end < start`)
    /// yields nothing; a range reaching past the capacity is rejected as a
    /// whole.
    pub fn dump(
        &self,
        range: RangeInclusive<u32>,
        mode: DumpMode,
    ) -> Result<Dump<'_>, OutOfBounds> {
        let (base, bytes) = self.span(&range)?;
        Ok(Dump::new(base, bytes, mode))
    }

    /// Split `range` into rows of `width` bytes for hex-dump output
    pub fn rows(&self, range: RangeInclusive<u32>, width: usize) -> Result<Rows<'_>, OutOfBounds> {
        let (base, bytes) = self.span(&range)?;
        Ok(Rows::new(base, bytes, width))
    }
}

impl<const N: usize> EepromStorage for BackingStore<N> {
    fn capacity(&self) -> usize {
        N
    }

    fn read(&self, address: u32, len: usize) -> Result<&[u8], OutOfBounds> {
        let range = checked_range(address, len, N)?;
        Ok(&self.bytes[range])
    }

    fn write(&mut self, address: u32, bytes: &[u8]) -> Result<(), OutOfBounds> {
        let range = checked_range(address, bytes.len(), N)?;
        self.bytes[range].copy_from_slice(bytes);
        Ok(())
    }
}
