//! Register-definition records
//!
//! One record per input line:
//!
//! ```text
//! name,address_hex,type,value,length,endianness
//! reg1,1000,FLOAT,3.14,0,0
//! reg4,0x100E,HEX,0xDEADBEEF,4,1
//! ```

pub mod parser;
pub mod types;

pub use parser::{parse_hex_u32, parse_record, ParseError, ParseFailure, FIELD_COUNT};
pub use types::{Endianness, Record, RecordType, TypeTag};
