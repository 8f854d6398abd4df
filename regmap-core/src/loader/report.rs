//! Loader events and batch summary

use crate::encoder::{EncodeError, WriteSummary};
use crate::record::ParseFailure;

/// Why a single line was not applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError<'a> {
    /// The line is not a well-formed record
    Parse(ParseFailure<'a>),
    /// The record parsed but could not be written
    Encode(EncodeError),
}

impl<'a> From<ParseFailure<'a>> for LineError<'a> {
    fn from(e: ParseFailure<'a>) -> Self {
        LineError::Parse(e)
    }
}

impl From<EncodeError> for LineError<'_> {
    fn from(e: EncodeError) -> Self {
        LineError::Encode(e)
    }
}

/// Progress of a batch load, reported per record line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadEvent<'a> {
    /// Record written to the store
    Written {
        line_no: usize,
        summary: WriteSummary<'a>,
    },
    /// Line skipped, not a well-formed record
    ParseFailed {
        line_no: usize,
        failure: ParseFailure<'a>,
    },
    /// Record skipped, encoder refused it
    Rejected {
        line_no: usize,
        line: &'a str,
        error: EncodeError,
    },
    /// Error limit reached, remaining lines not processed
    Aborted { line_no: usize, errors: usize },
}

/// Summary of a batch load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoadReport {
    /// Record lines processed (blank and comment lines excluded)
    pub records: usize,
    /// Records written to the store
    pub written: usize,
    /// Blank or comment lines passed over
    pub skipped: usize,
    /// Lines that failed to parse
    pub parse_failures: usize,
    /// Records the encoder rejected
    pub encode_failures: usize,
    /// Batch stopped early on the error limit
    pub aborted: bool,
}

impl LoadReport {
    /// Parse and encode failures combined
    pub fn errors(&self) -> usize {
        self.parse_failures + self.encode_failures
    }

    /// Every record line was written
    pub fn is_clean(&self) -> bool {
        self.errors() == 0 && !self.aborted
    }
}
