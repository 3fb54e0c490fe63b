//! Report rendering: charts, the QC HTML document, and metrics JSON.
//!
//! - `charts`: pure histogram binning plus PNG rendering via `plotters`
//! - `html`: the self-contained QC report document
//!
//! Chart data is computed by pure functions; all file writes stay at the
//! module boundary. Writes are not transactional: a failed image write
//! leaves the run directory partially populated.

pub mod charts;
pub mod html;

use serde::Serialize;
use std::path::Path;

use crate::analyzer::SummaryStats;

/// Derived-metrics summary persisted next to the QC report.
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    /// Identifier of the analyzed device.
    pub device_id: String,
    /// Target frame rate of the run.
    pub target_fps: u32,
    /// Records present in the log.
    pub record_count: usize,
    /// Frames inferred as dropped from sequence gaps.
    pub drop_count: u64,
    /// Statistics over the inter-frame intervals in milliseconds.
    pub interval_ms: SummaryStats,
    /// Statistics over the brightness values.
    pub brightness: SummaryStats,
}

/// Write the metrics summary as pretty-printed JSON.
pub fn write_metrics_json(path: &Path, metrics: &RunMetrics) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(metrics).map_err(std::io::Error::from)?;
    std::fs::write(path, json)
}
