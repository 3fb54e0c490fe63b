//! Log analysis module: loading, parsing, validation, derived metrics.
//!
//! Provides the read side of both tools:
//! - `log_loader`: buffered sequential line reading for finite logs
//! - `frame_log`: frame-record parsing, ordering validation, drop counting
//! - `timing_log`: timing-record parsing and jitter extraction
//! - `metrics`: interval derivation and one-pass summary statistics
//!
//! Logs are read once, fully into memory, and discarded after the run.
//! A malformed line fails the whole read; there is no partial recovery.

pub mod frame_log;
pub mod log_loader;
pub mod metrics;
pub mod timing_log;

pub use frame_log::{FrameLog, FrameSeries, load_frame_log};
pub use metrics::{SummaryStats, intervals_ms};
pub use timing_log::{JitterSeries, TimingLog, load_timing_log};

/// Error type for log reading failures.
#[derive(Debug)]
pub enum LogReadError {
    FileRead(String),
    Parse { line: usize, message: String },
    Validation(String),
}

impl std::fmt::Display for LogReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogReadError::FileRead(msg) => write!(f, "Failed to read log: {}", msg),
            LogReadError::Parse { line, message } => {
                write!(f, "Failed to parse log line {}: {}", line, message)
            }
            LogReadError::Validation(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for LogReadError {}
