//! Record type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Encoding selected by a record's type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordType {
    /// IEEE-754 single precision, little-endian
    Float,
    /// Signed 32-bit integer, little-endian
    Int,
    /// Zero-terminated ASCII text
    String,
    /// Low bytes of a 32-bit hex value in a chosen byte order
    Hex,
    /// Additive checksum of the preceding bytes
    Checksum,
}

impl RecordType {
    /// Look up a type tag, ignoring ASCII case
    pub fn from_tag(tag: &str) -> Option<Self> {
        const TAGS: [(&str, RecordType); 5] = [
            ("FLOAT", RecordType::Float),
            ("INT", RecordType::Int),
            ("STRING", RecordType::String),
            ("HEX", RecordType::Hex),
            ("CHECKSUM", RecordType::Checksum),
        ];

        TAGS.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tag))
            .map(|&(_, ty)| ty)
    }

    /// Canonical tag text
    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Float => "FLOAT",
            RecordType::Int => "INT",
            RecordType::String => "STRING",
            RecordType::Hex => "HEX",
            RecordType::Checksum => "CHECKSUM",
        }
    }
}

/// Type tag as it appeared in the input
///
/// Unknown tags survive parsing so the encoder can reject them with its
/// own error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TypeTag<'a> {
    Known(RecordType),
    Unknown(&'a str),
}

impl<'a> TypeTag<'a> {
    pub fn parse(tag: &'a str) -> Self {
        match RecordType::from_tag(tag) {
            Some(ty) => TypeTag::Known(ty),
            None => TypeTag::Unknown(tag),
        }
    }

    pub fn known(self) -> Option<RecordType> {
        match self {
            TypeTag::Known(ty) => Some(ty),
            TypeTag::Unknown(_) => None,
        }
    }
}

/// Byte order for HEX records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Endianness {
    /// Least-significant byte first
    #[default]
    Little,
    /// Most-significant byte first
    Big,
}

impl Endianness {
    /// Decode the flag field: zero is little-endian, anything else big
    pub fn from_flag(flag: u8) -> Self {
        if flag == 0 {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

/// One decoded input line
///
/// Borrows its text fields from the line it was parsed from and is
/// consumed by the encoder straight away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Record<'a> {
    /// Display name, no effect on encoding
    pub name: &'a str,
    /// Target offset in the store
    pub address: u32,
    /// Requested encoding
    pub tag: TypeTag<'a>,
    /// Payload text, interpreted per type
    pub raw_value: &'a str,
    /// Byte count for STRING, HEX and CHECKSUM
    pub length: u8,
    /// Byte order for HEX
    pub endianness: Endianness,
}
