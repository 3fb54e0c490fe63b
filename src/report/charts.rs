//! Histogram binning and chart rendering.
//!
//! Binning is a pure function over the value sequence so it can be tested
//! without touching the filesystem; the render functions draw 640x480 PNG
//! images with `plotters`.

use plotters::prelude::*;
use std::path::Path;

/// Rendered image size in pixels.
const CHART_SIZE: (u32, u32) = (640, 480);

/// Error type for chart rendering failures.
#[derive(Debug)]
pub struct ChartRenderError(pub String);

impl std::fmt::Display for ChartRenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to render chart: {}", self.0)
    }
}

impl std::error::Error for ChartRenderError {}

/// Equal-width histogram bins over a value sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSpec {
    /// Left edge of the first bin.
    pub bin_start: f64,
    /// Width of every bin.
    pub bin_width: f64,
    /// Per-bin value counts.
    pub counts: Vec<u64>,
}

impl HistogramSpec {
    /// Right edge of the last bin.
    pub fn bin_end(&self) -> f64 {
        self.bin_start + self.bin_width * self.counts.len() as f64
    }
}

/// Bin `values` into `bin_count` equal-width bins spanning their range.
///
/// Values equal to the maximum land in the last bin. When all values are
/// identical the bins get a unit width so the histogram still has extent.
///
/// # Returns
///
/// `None` when `values` is empty or `bin_count` is zero.
pub fn histogram_bins(values: &[f64], bin_count: usize) -> Option<HistogramSpec> {
    if values.is_empty() || bin_count == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let bin_width = if span > 0.0 { span / bin_count as f64 } else { 1.0 };

    let mut counts = vec![0u64; bin_count];
    for &value in values {
        let mut index = ((value - min) / bin_width) as usize;
        if index >= bin_count {
            index = bin_count - 1;
        }
        counts[index] += 1;
    }

    Some(HistogramSpec {
        bin_start: min,
        bin_width,
        counts,
    })
}

/// Draw a histogram PNG from pre-computed bins.
///
/// # Parameters
///
/// * `path` - Destination PNG file
/// * `title` - Chart caption
/// * `x_label` - X axis description
/// * `spec` - Bins produced by [`histogram_bins`]
pub fn render_histogram(
    path: &Path,
    title: &str,
    x_label: &str,
    spec: &HistogramSpec,
) -> Result<(), ChartRenderError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ChartRenderError(e.to_string()))?;

    let y_max = spec.counts.iter().copied().max().unwrap_or(0).max(1);
    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(spec.bin_start..spec.bin_end(), 0u64..y_max + 1)
        .map_err(|e| ChartRenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Count")
        .draw()
        .map_err(|e| ChartRenderError(e.to_string()))?;

    chart
        .draw_series(spec.counts.iter().enumerate().map(|(index, &count)| {
            let x0 = spec.bin_start + index as f64 * spec.bin_width;
            let x1 = x0 + spec.bin_width;
            Rectangle::new([(x0, 0), (x1, count)], BLUE.filled())
        }))
        .map_err(|e| ChartRenderError(e.to_string()))?;

    root.present().map_err(|e| ChartRenderError(e.to_string()))?;
    Ok(())
}

/// Draw the brightness-over-index line chart PNG.
///
/// # Parameters
///
/// * `path` - Destination PNG file
/// * `brightness` - Brightness values in frame order
pub fn render_brightness_series(path: &Path, brightness: &[f64]) -> Result<(), ChartRenderError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| ChartRenderError(e.to_string()))?;

    let y_min = brightness.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = brightness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Flat or empty series still get a visible axis span.
    let (y_min, y_max) = if brightness.is_empty() || y_min == y_max {
        (y_min.min(0.0) - 1.0, y_max.max(0.0) + 1.0)
    } else {
        (y_min, y_max)
    };

    let mut chart = ChartBuilder::on(&root)
        .caption("Brightness Trend", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(0.0..brightness.len().max(1) as f64, y_min..y_max)
        .map_err(|e| ChartRenderError(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Frame index")
        .y_desc("Brightness (a.u.)")
        .draw()
        .map_err(|e| ChartRenderError(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(
            brightness
                .iter()
                .enumerate()
                .map(|(index, &value)| (index as f64, value)),
            &BLUE,
        ))
        .map_err(|e| ChartRenderError(e.to_string()))?;

    root.present().map_err(|e| ChartRenderError(e.to_string()))?;
    Ok(())
}
