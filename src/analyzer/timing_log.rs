//! Timing-log parsing and jitter extraction.
//!
//! Reads the line-delimited log written by a capture loop's timing logger
//! and collects the per-tick jitter values. When sequence numbers are
//! present, gaps between consecutive ticks are counted as lost ticks.

use std::path::Path;

use super::LogReadError;
use super::log_loader::LogLoader;
use crate::record::TimingRecord;

/// Jitter values collected from a timing log.
#[derive(Debug, Clone)]
pub struct JitterSeries {
    /// Per-tick jitter in nanoseconds, in log order.
    pub jitter_ns: Vec<f64>,
    /// Ticks missing between consecutive sequence numbers.
    pub sequence_gaps: u64,
}

impl JitterSeries {
    /// Number of ticks in the log.
    pub fn record_count(&self) -> usize {
        self.jitter_ns.len()
    }
}

/// Outcome of reading a timing log.
#[derive(Debug)]
pub enum TimingLog {
    /// The log contains no records.
    Empty,
    /// The log parsed completely.
    Series(JitterSeries),
}

/// Load and parse a line-delimited timing log.
///
/// Every line is parsed independently; the first malformed line fails
/// the whole operation with the line number. An empty log returns
/// [`TimingLog::Empty`].
///
/// # Parameters
///
/// * `path` - Path to the line-delimited JSON timing log
///
/// # Returns
///
/// The collected jitter series, or the first read or parse error.
pub fn load_timing_log(path: &Path) -> Result<TimingLog, LogReadError> {
    let mut loader = LogLoader::open(path)
        .map_err(|e| LogReadError::FileRead(format!("{}: {}", path.display(), e)))?;

    let mut jitter_ns = Vec::new();
    let mut sequence_gaps = 0u64;
    let mut last_sequence: Option<u64> = None;

    while let Some((line_number, line)) = loader
        .next_line()
        .map_err(|e| LogReadError::FileRead(format!("{}: {}", path.display(), e)))?
    {
        let record: TimingRecord = serde_json::from_str(&line).map_err(|e| LogReadError::Parse {
            line: line_number,
            message: e.to_string(),
        })?;

        if let (Some(last), Some(current)) = (last_sequence, record.sequence_number) {
            if current > last + 1 {
                sequence_gaps += current - last - 1;
            } else if current <= last {
                log::warn!(
                    "timing log line {}: sequence number {} after {}",
                    line_number,
                    current,
                    last
                );
            }
        }
        if record.sequence_number.is_some() {
            last_sequence = record.sequence_number;
        }

        jitter_ns.push(record.jitter_ns);
    }

    if jitter_ns.is_empty() {
        return Ok(TimingLog::Empty);
    }

    Ok(TimingLog::Series(JitterSeries {
        jitter_ns,
        sequence_gaps,
    }))
}
