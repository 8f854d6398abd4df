//! Read-back iterators over the backing store

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which bytes a dump reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DumpMode {
    /// Every address in range
    #[default]
    All,
    /// Only addresses holding a non-zero byte
    SkipZero,
}

impl DumpMode {
    /// Map a `skip_zero` flag to a mode
    pub fn from_skip_zero(skip_zero: bool) -> Self {
        if skip_zero {
            DumpMode::SkipZero
        } else {
            DumpMode::All
        }
    }
}

/// Iterator of `(address, byte)` pairs
#[derive(Debug, Clone)]
pub struct Dump<'a> {
    base: u32,
    bytes: &'a [u8],
    pos: usize,
    mode: DumpMode,
}

impl<'a> Dump<'a> {
    pub(crate) fn new(base: u32, bytes: &'a [u8], mode: DumpMode) -> Self {
        Self {
            base,
            bytes,
            pos: 0,
            mode,
        }
    }
}

impl Iterator for Dump<'_> {
    type Item = (u32, u8);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.bytes.len() {
            let offset = self.pos;
            let byte = self.bytes[offset];
            self.pos += 1;

            if self.mode == DumpMode::SkipZero && byte == 0 {
                continue;
            }
            return Some((self.base + offset as u32, byte));
        }
        None
    }
}

/// One line of a hex dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DumpRow<'a> {
    /// Address of the first byte in the row
    pub address: u32,
    /// Up to `width` bytes
    pub bytes: &'a [u8],
}

/// Iterator of fixed-width dump rows
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    base: u32,
    chunks: core::slice::Chunks<'a, u8>,
    width: usize,
    index: usize,
}

impl<'a> Rows<'a> {
    pub(crate) fn new(base: u32, bytes: &'a [u8], width: usize) -> Self {
        let width = width.max(1);
        Self {
            base,
            chunks: bytes.chunks(width),
            width,
            index: 0,
        }
    }
}

impl<'a> Iterator for Rows<'a> {
    type Item = DumpRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.chunks.next()?;
        let address = self.base + (self.index * self.width) as u32;
        self.index += 1;
        Some(DumpRow { address, bytes })
    }
}

#[cfg(test)]
mod tests {
    use crate::store::BackingStore;
    use crate::traits::EepromStorage;

    use super::*;

    fn sample_store() -> BackingStore<64> {
        let mut store = BackingStore::new();
        store.write(0x10, &[0xDE, 0x00, 0xBE, 0xEF]).unwrap();
        store
    }

    #[test]
    fn test_dump_all_reports_every_address() {
        let store = sample_store();
        let mut dump = store.dump(0x0F..=0x13, DumpMode::All).unwrap();

        assert_eq!(dump.next(), Some((0x0F, 0x00)));
        assert_eq!(dump.next(), Some((0x10, 0xDE)));
        assert_eq!(dump.next(), Some((0x11, 0x00)));
        assert_eq!(dump.next(), Some((0x12, 0xBE)));
        assert_eq!(dump.next(), Some((0x13, 0xEF)));
        assert_eq!(dump.next(), None);
    }

    #[test]
    fn test_dump_skip_zero() {
        let store = sample_store();
        let mut dump = store.dump(0x00..=0x3F, DumpMode::SkipZero).unwrap();

        assert_eq!(dump.next(), Some((0x10, 0xDE)));
        assert_eq!(dump.next(), Some((0x12, 0xBE)));
        assert_eq!(dump.next(), Some((0x13, 0xEF)));
        assert_eq!(dump.next(), None);
    }

    #[test]
    fn test_dump_empty_range() {
        let store = sample_store();
        assert_eq!(store.dump(5..=4, DumpMode::All).unwrap().count(), 0);
    }

    #[test]
    fn test_rows_split_on_width() {
        let store = sample_store();
        let rows: heapless::Vec<DumpRow<'_>, 8> = store.rows(0x08..=0x1F, 16).unwrap().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].address, 0x08);
        assert_eq!(rows[0].bytes.len(), 16);
        assert_eq!(rows[0].bytes[8], 0xDE);
        assert_eq!(rows[1].address, 0x18);
        assert_eq!(rows[1].bytes.len(), 8);
        assert!(rows[1].bytes.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_rows_zero_width_falls_back_to_one() {
        let store = sample_store();
        assert_eq!(store.rows(0x10..=0x13, 0).unwrap().count(), 4);
    }

    #[test]
    fn test_dump_mode_from_flag() {
        assert_eq!(DumpMode::from_skip_zero(true), DumpMode::SkipZero);
        assert_eq!(DumpMode::from_skip_zero(false), DumpMode::All);
    }
}
