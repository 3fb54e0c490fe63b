//! QC report tool.
//!
//! Synthesizes a fake camera-frame log, derives interval and brightness
//! metrics from it, and renders a QC HTML report into a fresh timestamped
//! run directory. Run parameters are the constants below.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

use camera_timing_qc::analyzer::{FrameLog, SummaryStats, intervals_ms, load_frame_log};
use camera_timing_qc::generator::{SyntheticRunConfig, generate_frame_log};
use camera_timing_qc::report::charts::{histogram_bins, render_brightness_series, render_histogram};
use camera_timing_qc::report::html::{QcReportContext, write_qc_report};
use camera_timing_qc::report::{RunMetrics, write_metrics_json};

/// Root directory for generated QC runs.
const REPORTS_ROOT: &str = "reports";
/// Target frame rate of the synthetic run.
const TARGET_FPS: u32 = 30;
/// Length of the synthetic recording in seconds.
const DURATION_SECONDS: u32 = 60;
/// Per-slot drop probability.
const DROP_PROBABILITY: f64 = 0.01;
/// Seed for the synthetic run.
const RANDOM_SEED: u64 = 0;
/// Bin count of the interval histogram.
const INTERVAL_HISTOGRAM_BINS: usize = 50;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let run_dir = PathBuf::from(REPORTS_ROOT).join(format!("fake_run_{}", stamp));
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("Failed to create run directory {}", run_dir.display()))?;

    let config = SyntheticRunConfig {
        frame_rate: TARGET_FPS,
        duration_seconds: DURATION_SECONDS,
        drop_probability: DROP_PROBABILITY,
        random_seed: RANDOM_SEED,
        ..SyntheticRunConfig::default()
    };

    let log_path = run_dir.join("cam_front.jsonl");
    let summary = generate_frame_log(&log_path, &config)?;
    info!(
        "Generated {} records into {} ({} slots dropped)",
        summary.records_written,
        log_path.display(),
        summary.slots_dropped
    );

    let series = match load_frame_log(&log_path)? {
        FrameLog::Insufficient { records } => {
            println!("Not enough data ({} records)", records);
            return Ok(());
        }
        FrameLog::Series(series) => series,
    };

    let intervals = intervals_ms(&series.ts_mono_ns);
    let interval_stats = SummaryStats::compute(&intervals).context("No intervals to summarize")?;
    let brightness_stats =
        SummaryStats::compute(&series.brightness).context("No brightness values to summarize")?;

    let interval_image = run_dir.join("interval_hist.png");
    let interval_bins =
        histogram_bins(&intervals, INTERVAL_HISTOGRAM_BINS).context("No intervals to bin")?;
    render_histogram(
        &interval_image,
        "Frame Interval Histogram",
        "Inter-frame interval (ms)",
        &interval_bins,
    )?;

    let brightness_image = run_dir.join("brightness.png");
    render_brightness_series(&brightness_image, &series.brightness)?;

    let metrics = RunMetrics {
        device_id: config.device_id.clone(),
        target_fps: config.frame_rate,
        record_count: series.record_count(),
        drop_count: series.drop_count,
        interval_ms: interval_stats,
        brightness: brightness_stats,
    };
    write_metrics_json(&run_dir.join("metrics.json"), &metrics)
        .context("Failed to write metrics.json")?;

    let generated_at = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    let report_path = run_dir.join("qc_report.html");
    write_qc_report(
        &report_path,
        &QcReportContext {
            generated_at: &generated_at,
            drop_count: series.drop_count,
            target_fps: config.frame_rate,
            interval_stats: &interval_stats,
            interval_image: "interval_hist.png",
            brightness_image: "brightness.png",
        },
    )
    .context("Failed to write QC report")?;

    println!("QC report: {}", report_path.display());
    Ok(())
}
