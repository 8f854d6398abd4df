//! Per-type record encoder
//!
//! Turns a parsed [`Record`] into bytes and writes them to an
//! [`EepromStorage`]. Bytes are staged first and written in one call, so
//! the storage's bounds check covers the whole record and a failed record
//! never leaves a partial write behind.
//!
//! | type     | bytes written                                   | width        |
//! |----------|-------------------------------------------------|--------------|
//! | FLOAT    | IEEE-754 `f32`, little-endian                   | 4            |
//! | INT      | `i32`, little-endian                            | 4            |
//! | STRING   | text truncated/zero-padded to `length`, `0x00`  | `length + 1` |
//! | HEX      | low `length` bytes of a `u32`, in record order  | 1-4          |
//! | CHECKSUM | sum of the `length` preceding bytes, mod 256    | 1            |

pub mod value;

use heapless::Vec;

use crate::checksum::{checksum, swap_bytes32};
use crate::record::{Endianness, Record, RecordType};
use crate::traits::{EepromStorage, OutOfBounds};

pub use value::NumericPolicy;

/// Largest single write: a 255-byte string plus its terminator
pub const MAX_WRITE_LEN: usize = u8::MAX as usize + 1;

/// Widest HEX value in bytes
pub const MAX_HEX_LEN: u8 = 4;

/// Errors from encoding a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Type tag is not one the encoder knows
    UnsupportedType,
    /// Value text does not parse as the record's type
    InvalidNumericLiteral,
    /// HEX length outside 1-4
    InvalidLength,
    /// STRING value contains non-ASCII characters
    NonAsciiString,
    /// Write or checksum window outside the store
    OutOfBounds(OutOfBounds),
}

impl From<OutOfBounds> for EncodeError {
    fn from(e: OutOfBounds) -> Self {
        EncodeError::OutOfBounds(e)
    }
}

impl From<value::BadLiteral> for EncodeError {
    fn from(_: value::BadLiteral) -> Self {
        EncodeError::InvalidNumericLiteral
    }
}

/// What a successful encode wrote
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WriteSummary<'a> {
    /// Record name
    pub name: &'a str,
    /// First address written
    pub address: u32,
    /// Encoding used
    pub record_type: RecordType,
    /// Bytes as they now sit in the store
    pub bytes: Vec<u8, MAX_WRITE_LEN>,
}

/// Encode a record, rejecting bad numeric literals
pub fn encode<'a, S: EepromStorage + ?Sized>(
    record: &Record<'a>,
    store: &mut S,
) -> Result<WriteSummary<'a>, EncodeError> {
    encode_with(record, store, NumericPolicy::Reject)
}

/// Encode a record with an explicit policy for bad numeric literals
pub fn encode_with<'a, S: EepromStorage + ?Sized>(
    record: &Record<'a>,
    store: &mut S,
    policy: NumericPolicy,
) -> Result<WriteSummary<'a>, EncodeError> {
    let record_type = record.tag.known().ok_or(EncodeError::UnsupportedType)?;

    let bytes = match record_type {
        RecordType::Float => {
            let value = policy.float(record.raw_value)?;
            staged(&value.to_le_bytes())
        }
        RecordType::Int => {
            let value = policy.int(record.raw_value)?;
            staged(&value.to_le_bytes())
        }
        RecordType::String => string_bytes(record.raw_value, record.length)?,
        RecordType::Hex => {
            let value = policy.hex(record.raw_value)?;
            hex_bytes(value, record.length, record.endianness)?
        }
        RecordType::Checksum => {
            let sum = checksum(&*store, record.address, record.length as usize)?;
            staged(&[sum])
        }
    };

    store.write(record.address, &bytes)?;

    Ok(WriteSummary {
        name: record.name,
        address: record.address,
        record_type,
        bytes,
    })
}

fn staged(bytes: &[u8]) -> Vec<u8, MAX_WRITE_LEN> {
    // Callers pass at most 4 bytes
    let mut out = Vec::new();
    let _ = out.extend_from_slice(bytes);
    out
}

/// ASCII text truncated or zero-padded to `length`, then a terminator
fn string_bytes(text: &str, length: u8) -> Result<Vec<u8, MAX_WRITE_LEN>, EncodeError> {
    if !text.is_ascii() {
        return Err(EncodeError::NonAsciiString);
    }
    let length = length as usize;
    let text = text.as_bytes();
    let copied = text.len().min(length);

    let mut out: Vec<u8, MAX_WRITE_LEN> = Vec::new();
    let _ = out.extend_from_slice(&text[..copied]);
    // length + 1 <= MAX_WRITE_LEN, so the resize cannot fail
    let _ = out.resize(length + 1, 0);
    Ok(out)
}

/// Low `length` bytes of `value`, ordered by `endianness`
///
/// Selection always takes the least significant bytes; the byte order only
/// decides which of them is written first.
fn hex_bytes(
    value: u32,
    length: u8,
    endianness: Endianness,
) -> Result<Vec<u8, MAX_WRITE_LEN>, EncodeError> {
    if length == 0 || length > MAX_HEX_LEN {
        return Err(EncodeError::InvalidLength);
    }
    let length = length as usize;

    let bytes = match endianness {
        // LSB first: the selected bytes lead the little-endian image
        Endianness::Little => staged(&value.to_le_bytes()[..length]),
        // MSB first: the selected bytes trail the swapped image
        Endianness::Big => staged(&swap_bytes32(value).to_le_bytes()[4 - length..]),
    };
    Ok(bytes)
}
