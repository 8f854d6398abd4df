//! Batch loader
//!
//! Drives parser and encoder over line-oriented input. Blank lines and
//! `#` comments are passed over; every other line is one record. Failures
//! are reported through the event callback and the line is skipped; the
//! configured error limit decides when a batch gives up.

pub mod report;

use crate::config::LoaderConfig;
use crate::encoder::{encode_with, WriteSummary};
use crate::record::parse_record;
use crate::traits::EepromStorage;

pub use report::{LineError, LoadEvent, LoadReport};

/// Applies register-definition lines to a store
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with the given policy
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Parse and encode one record line
    ///
    /// The store is only touched if both stages succeed.
    pub fn apply<'a, S: EepromStorage + ?Sized>(
        &self,
        line: &'a str,
        store: &mut S,
    ) -> Result<WriteSummary<'a>, LineError<'a>> {
        let record = parse_record(line)?;
        let summary = encode_with(&record, store, self.config.invalid_numeric)?;
        Ok(summary)
    }

    /// Apply every record line in `input`
    ///
    /// `on_event` sees each outcome as it happens, with 1-based line numbers.
    /// Once failures reach `max_errors` the batch stops before the next
    /// record line; `Some(0)` and `Some(1)` both stop on the first failure.
    /// Reaching the limit on the last record line does not mark the batch
    /// aborted.
    pub fn load<'a, S, F>(&self, input: &'a str, store: &mut S, mut on_event: F) -> LoadReport
    where
        S: EepromStorage + ?Sized,
        F: FnMut(&LoadEvent<'a>),
    {
        let mut report = LoadReport::default();
        // Line of the failure that reached the limit
        let mut limit_hit = None;

        for (index, raw) in input.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                report.skipped += 1;
                continue;
            }

            if let Some(at) = limit_hit {
                report.aborted = true;
                on_event(&LoadEvent::Aborted {
                    line_no: at,
                    errors: report.errors(),
                });
                break;
            }

            report.records += 1;
            let (event, failed) = match self.apply(line, store) {
                Ok(summary) => {
                    report.written += 1;
                    (LoadEvent::Written { line_no, summary }, false)
                }
                Err(LineError::Parse(failure)) => {
                    report.parse_failures += 1;
                    (LoadEvent::ParseFailed { line_no, failure }, true)
                }
                Err(LineError::Encode(error)) => {
                    report.encode_failures += 1;
                    let event = LoadEvent::Rejected {
                        line_no,
                        line,
                        error,
                    };
                    (event, true)
                }
            };
            on_event(&event);

            if failed {
                if let Some(limit) = self.config.max_errors {
                    if report.errors() >= limit {
                        limit_hit = Some(line_no);
                    }
                }
            }
        }

        report
    }
}
