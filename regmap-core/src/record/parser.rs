//! Line parser for register-definition records
//!
//! Splits a line into its six comma-separated fields. Only the structure is
//! checked here; the value text is left for the encoder, which knows how
//! each type interprets it.

use super::types::{Endianness, Record, TypeTag};

/// Fields per record line
pub const FIELD_COUNT: usize = 6;

/// Why a line failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line does not have exactly six fields
    FieldCount,
    /// Name field is empty
    EmptyName,
    /// Address is not a 32-bit hex number
    InvalidAddress,
    /// Length is not a number in 0-255
    InvalidLength,
    /// Endianness flag is not a number in 0-255
    InvalidEndianness,
}

/// A line that could not be turned into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseFailure<'a> {
    /// The offending line, as given
    pub line: &'a str,
    /// What was wrong with it
    pub reason: ParseError,
}

/// Parse a hex number with an optional `0x`/`0X` prefix
pub fn parse_hex_u32(text: &str) -> Option<u32> {
    let text = text.trim();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Parse one `name,address,type,value,length,endianness` line
///
/// Surrounding whitespace is trimmed from every field. An unrecognised
/// type tag is accepted and carried as [`TypeTag::Unknown`].
pub fn parse_record(line: &str) -> Result<Record<'_>, ParseFailure<'_>> {
    let fail = |reason| ParseFailure { line, reason };

    let mut fields = [""; FIELD_COUNT];
    let mut count = 0;
    for field in line.split(',') {
        if count == FIELD_COUNT {
            return Err(fail(ParseError::FieldCount));
        }
        fields[count] = field.trim();
        count += 1;
    }
    if count != FIELD_COUNT {
        return Err(fail(ParseError::FieldCount));
    }

    let [name, address, tag, raw_value, length, endianness] = fields;

    if name.is_empty() {
        return Err(fail(ParseError::EmptyName));
    }
    let address = parse_hex_u32(address).ok_or(fail(ParseError::InvalidAddress))?;
    let length: u8 = length
        .parse()
        .map_err(|_| fail(ParseError::InvalidLength))?;
    let flag: u8 = endianness
        .parse()
        .map_err(|_| fail(ParseError::InvalidEndianness))?;

    Ok(Record {
        name,
        address,
        tag: TypeTag::parse(tag),
        raw_value,
        length,
        endianness: Endianness::from_flag(flag),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordType;

    #[test]
    fn test_parse_float_record() {
        let record = parse_record("reg1,1000,FLOAT,3.14,0,0").unwrap();
        assert_eq!(record.name, "reg1");
        assert_eq!(record.address, 0x1000);
        assert_eq!(record.tag, TypeTag::Known(RecordType::Float));
        assert_eq!(record.raw_value, "3.14");
        assert_eq!(record.length, 0);
        assert_eq!(record.endianness, Endianness::Little);
    }

    #[test]
    fn test_parse_hex_record_with_prefixes() {
        let record = parse_record("reg4,0x100E,HEX,0xDEADBEEF,4,1").unwrap();
        assert_eq!(record.address, 0x100E);
        assert_eq!(record.tag, TypeTag::Known(RecordType::Hex));
        assert_eq!(record.raw_value, "0xDEADBEEF");
        assert_eq!(record.length, 4);
        assert_eq!(record.endianness, Endianness::Big);

        let record = parse_record("reg4,0X100e,HEX,DEADBEEF,4,1").unwrap();
        assert_eq!(record.address, 0x100E);
    }

    #[test]
    fn test_parse_trims_fields() {
        let record = parse_record(" serial , 1010 , STRING , ABC123 , 8 , 0 \r").unwrap();
        assert_eq!(record.name, "serial");
        assert_eq!(record.address, 0x1010);
        assert_eq!(record.raw_value, "ABC123");
        assert_eq!(record.length, 8);
    }

    #[test]
    fn test_parse_unknown_type_is_not_a_failure() {
        let record = parse_record("reg9,2000,DOUBLE,1.0,0,0").unwrap();
        assert_eq!(record.tag, TypeTag::Unknown("DOUBLE"));
    }

    #[test]
    fn test_parse_empty_value_allowed() {
        let record = parse_record("crc,1020,CHECKSUM,,16,0").unwrap();
        assert_eq!(record.raw_value, "");
        assert_eq!(record.length, 16);
    }

    #[test]
    fn test_parse_too_few_fields() {
        let failure = parse_record("bad,line").unwrap_err();
        assert_eq!(failure.line, "bad,line");
        assert_eq!(failure.reason, ParseError::FieldCount);
    }

    #[test]
    fn test_parse_too_many_fields() {
        let failure = parse_record("a,1000,STRING,x,y,1,0").unwrap_err();
        assert_eq!(failure.reason, ParseError::FieldCount);
    }

    #[test]
    fn test_parse_empty_name() {
        let failure = parse_record(",1000,INT,1,0,0").unwrap_err();
        assert_eq!(failure.reason, ParseError::EmptyName);
    }

    #[test]
    fn test_parse_bad_address() {
        assert_eq!(
            parse_record("r,10G0,INT,1,0,0").unwrap_err().reason,
            ParseError::InvalidAddress
        );
        assert_eq!(
            parse_record("r,0x,INT,1,0,0").unwrap_err().reason,
            ParseError::InvalidAddress
        );
        assert_eq!(
            parse_record("r,123456789,INT,1,0,0").unwrap_err().reason,
            ParseError::InvalidAddress
        );
        assert_eq!(
            parse_record("r,+10,INT,1,0,0").unwrap_err().reason,
            ParseError::InvalidAddress
        );
    }

    #[test]
    fn test_parse_bad_length_and_endianness() {
        assert_eq!(
            parse_record("r,10,HEX,FF,four,0").unwrap_err().reason,
            ParseError::InvalidLength
        );
        assert_eq!(
            parse_record("r,10,HEX,FF,256,0").unwrap_err().reason,
            ParseError::InvalidLength
        );
        assert_eq!(
            parse_record("r,10,HEX,FF,1,big").unwrap_err().reason,
            ParseError::InvalidEndianness
        );
    }

    #[test]
    fn test_parse_hex_u32() {
        assert_eq!(parse_hex_u32("ff"), Some(0xFF));
        assert_eq!(parse_hex_u32("0xDEADBEEF"), Some(0xDEAD_BEEF));
        assert_eq!(parse_hex_u32("0X1"), Some(1));
        assert_eq!(parse_hex_u32("100000000"), None);
        assert_eq!(parse_hex_u32(""), None);
        assert_eq!(parse_hex_u32("-1"), None);
    }
}
