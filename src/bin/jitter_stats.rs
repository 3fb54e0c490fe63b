//! Jitter statistics tool.
//!
//! Reads a timing log written by a capture loop, prints jitter summary
//! statistics in milliseconds, and writes a histogram image into the
//! working directory. The log path defaults to the constant below; an
//! optional positional argument overrides it.

use anyhow::{Context, Result};
use std::env;
use std::path::Path;

use camera_timing_qc::analyzer::{SummaryStats, TimingLog, load_timing_log};
use camera_timing_qc::report::charts::{histogram_bins, render_histogram};

/// Timing log read when no path is given.
const DEFAULT_LOG_PATH: &str = "test.jsonl";
/// Histogram image written into the working directory.
const HISTOGRAM_IMAGE: &str = "jitter_hist.png";
/// Bin count of the jitter histogram.
const JITTER_HISTOGRAM_BINS: usize = 20;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let log_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_LOG_PATH.to_string());

    let series = match load_timing_log(Path::new(&log_path))? {
        TimingLog::Empty => {
            println!("Not enough data");
            return Ok(());
        }
        TimingLog::Series(series) => series,
    };

    if series.sequence_gaps > 0 {
        log::warn!("{} ticks missing from sequence numbers", series.sequence_gaps);
    }

    let jitter_ms: Vec<f64> = series.jitter_ns.iter().map(|jitter| jitter / 1e6).collect();
    let stats = SummaryStats::compute(&jitter_ms).context("No jitter values to summarize")?;

    println!("Jitter (ms) stats:");
    println!("mean: {:.2}", stats.mean);
    println!("std: {:.2}", stats.std);
    println!("min: {:.2}", stats.min);
    println!("max: {:.2}", stats.max);
    println!("count: {}", stats.count);

    let bins =
        histogram_bins(&jitter_ms, JITTER_HISTOGRAM_BINS).context("No jitter values to bin")?;
    render_histogram(
        Path::new(HISTOGRAM_IMAGE),
        "Jitter Distribution",
        "Jitter (ms)",
        &bins,
    )?;

    Ok(())
}
