//! Load progress and EEPROM dump logging

use defmt::*;

use regmap_core::config::DumpConfig;
use regmap_core::loader::{LoadEvent, LoadReport};
use regmap_core::{BackingStore, DumpMode};

/// Log one loader event
pub fn log_event(event: &LoadEvent<'_>) {
    match event {
        LoadEvent::Written { line_no, summary } => {
            debug!(
                "line {}: {=str} {=str} @ {=u32:#x} <- {=[u8]:#x}",
                line_no,
                summary.name,
                summary.record_type.as_str(),
                summary.address,
                summary.bytes.as_slice()
            );
        }
        LoadEvent::ParseFailed { line_no, failure } => {
            warn!(
                "line {}: skipped ({:?}): {=str}",
                line_no, failure.reason, failure.line
            );
        }
        LoadEvent::Rejected {
            line_no,
            line,
            error,
        } => {
            warn!("line {}: rejected ({:?}): {=str}", line_no, error, line);
        }
        LoadEvent::Aborted { line_no, errors } => {
            error!("Aborting batch at line {} after {} errors", line_no, errors);
        }
    }
}

/// Log the batch summary
pub fn log_summary(report: &LoadReport) {
    info!(
        "Loaded {} of {} records ({} parse failures, {} rejected)",
        report.written, report.records, report.parse_failures, report.encode_failures
    );
    if report.aborted {
        error!("Batch aborted before the end of input");
    } else if !report.is_clean() {
        warn!("{} records skipped", report.errors());
    }
}

/// Log the configured range of the store
///
/// `DumpMode::All` logs fixed-width rows; `DumpMode::SkipZero` logs each
/// non-zero byte on its own line.
pub fn dump<const N: usize>(store: &BackingStore<N>, config: &DumpConfig) {
    info!("EEPROM dump {=u32:#x}..={=u32:#x}", config.start, config.end);

    match config.mode() {
        DumpMode::All => match store.rows(config.range(), config.row_width) {
            Ok(rows) => {
                for row in rows {
                    info!("{=u32:#06x}: {=[u8]:#04x}", row.address, row.bytes);
                }
            }
            Err(e) => warn!("Dump range rejected: {:?}", e),
        },
        DumpMode::SkipZero => match store.dump(config.range(), DumpMode::SkipZero) {
            Ok(bytes) => {
                for (address, byte) in bytes {
                    info!("{=u32:#06x}: {=u8:#04x}", address, byte);
                }
            }
            Err(e) => warn!("Dump range rejected: {:?}", e),
        },
    }
}
