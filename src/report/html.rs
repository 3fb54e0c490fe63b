//! QC HTML report generation.
//!
//! Renders a small self-contained document that references the two chart
//! images by relative file name, so the run directory can be zipped or
//! moved as a whole.

use std::path::Path;

use crate::analyzer::SummaryStats;

/// Everything the QC report page displays.
#[derive(Debug, Clone)]
pub struct QcReportContext<'a> {
    /// Human-readable generation timestamp, local time.
    pub generated_at: &'a str,
    /// Frames inferred as dropped from sequence gaps.
    pub drop_count: u64,
    /// Target frame rate of the run.
    pub target_fps: u32,
    /// Statistics over the inter-frame intervals in milliseconds.
    pub interval_stats: &'a SummaryStats,
    /// File name of the interval histogram image, relative to the report.
    pub interval_image: &'a str,
    /// File name of the brightness chart image, relative to the report.
    pub brightness_image: &'a str,
}

/// Render the QC report document.
pub fn render_qc_html(context: &QcReportContext<'_>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>QC Report</title></head>
<body>
<h2>Camera QC Report</h2>
<p>Generated: {generated_at}</p>
<p>Drops (approx): {drop_count} &mdash; Target FPS: {target_fps}</p>
<p>Inter-frame interval: mean {mean:.2} ms, std {std:.2} ms over {count} intervals</p>
<h3>Frame Interval Histogram</h3>
<img src="{interval_image}" width="640">
<h3>Brightness Trend</h3>
<img src="{brightness_image}" width="640">
</body></html>
"#,
        generated_at = context.generated_at,
        drop_count = context.drop_count,
        target_fps = context.target_fps,
        mean = context.interval_stats.mean,
        std = context.interval_stats.std,
        count = context.interval_stats.count,
        interval_image = context.interval_image,
        brightness_image = context.brightness_image,
    )
}

/// Render the QC report and write it to `path`.
pub fn write_qc_report(path: &Path, context: &QcReportContext<'_>) -> std::io::Result<()> {
    std::fs::write(path, render_qc_html(context))
}
