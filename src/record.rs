//! Record types for the line-delimited JSON log formats.
//!
//! Both tools consume logs where every line is one complete JSON object.
//! `FrameRecord` is the per-frame entry written by the synthetic generator
//! and read back by the QC path; `TimingRecord` is the per-tick entry
//! written by a capture loop's timing logger and read by the jitter path.

use serde::{Deserialize, Serialize};

/// One observed (or synthesized) camera frame.
///
/// Only `seq` and `ts_mono_ns` are required on read; the remaining fields
/// default when a producer omits them. Serialized field order matches the
/// on-disk format of the capture tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Monotonic sequence number. Gaps indicate dropped frames.
    pub seq: u64,
    /// Monotonic clock timestamp in nanoseconds, non-decreasing across
    /// the records actually present in a well-formed log.
    pub ts_mono_ns: i64,
    /// Wall clock timestamp in nanoseconds.
    #[serde(default)]
    pub ts_wall_ns: i64,
    /// Identifier of the producing device, e.g. `cam_front`.
    #[serde(default)]
    pub device_id: Option<String>,
    /// Mean image brightness, arbitrary units.
    #[serde(default)]
    pub brightness: f64,
}

/// One tick of a periodic capture loop as written by the timing logger.
///
/// Only `jitter_ns` is consumed by the jitter statistics; the other
/// fields are carried for gap detection and future inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Identifier of the ticking device.
    #[serde(default)]
    pub device: Option<String>,
    /// Tick sequence number, contiguous when no ticks were lost.
    #[serde(default)]
    pub sequence_number: Option<u64>,
    /// Monotonic clock timestamp in nanoseconds.
    #[serde(default)]
    pub ts_mono_ns: Option<i64>,
    /// Wall clock timestamp in nanoseconds.
    #[serde(default)]
    pub ts_wall_ns: Option<i64>,
    /// The tick's nominal (expected) timestamp in nanoseconds.
    #[serde(default)]
    pub ts_target_ns: Option<i64>,
    /// Deviation of the observed timestamp from the expected periodic
    /// value, in nanoseconds.
    pub jitter_ns: f64,
}
