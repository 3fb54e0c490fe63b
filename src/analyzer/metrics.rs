//! Interval derivation and one-pass summary statistics.
//!
//! Statistics are computed over the full sequence in one pass; there is
//! no outlier rejection and no windowing.

use serde::Serialize;

/// Nanoseconds per millisecond, for interval conversion.
const NS_PER_MS: f64 = 1e6;

/// Consecutive timestamp differences converted to milliseconds.
///
/// For `n` timestamps the result has `n - 1` entries; an empty or
/// single-element input yields an empty result. Callers deriving
/// interval statistics must gate on at least two records.
pub fn intervals_ms(ts_mono_ns: &[i64]) -> Vec<f64> {
    ts_mono_ns
        .windows(2)
        .map(|pair| (pair[1] - pair[0]) as f64 / NS_PER_MS)
        .collect()
}

/// Summary statistics over a value sequence.
///
/// `std` is the population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl SummaryStats {
    /// Compute statistics over `values` in a single pass.
    ///
    /// # Returns
    ///
    /// `None` for an empty input, the statistics otherwise.
    pub fn compute(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let count = values.len();
        let mean = values.iter().sum::<f64>() / count as f64;
        let variance = values
            .iter()
            .map(|value| {
                let delta = value - mean;
                delta * delta
            })
            .sum::<f64>()
            / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            mean,
            std: variance.sqrt(),
            min,
            max,
            count,
        })
    }
}
