//! Deterministic synthetic frame-log generation.
//!
//! Produces a line-delimited JSON log that simulates a camera stream:
//! - nominal timestamps at a fixed frame rate, perturbed by Gaussian jitter
//! - randomly dropped frame slots (sequence number and slot are skipped)
//! - a slow brightness random walk with a small constant upward drift
//!
//! All randomness comes from a seeded `StdRng`, so the same configuration
//! always produces byte-identical output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::record::FrameRecord;

/// Default standard deviation of the timestamp jitter (2 ms in ns).
pub const DEFAULT_JITTER_SIGMA_NS: f64 = 2e6;

/// Default first timestamp of a synthetic run. A fixed value keeps the
/// generated bytes reproducible across invocations.
pub const DEFAULT_START_TIMESTAMP_NS: i64 = 1_700_000_000_000_000_000;

/// Error type for generation failures.
#[derive(Debug)]
pub enum GenerateError {
    InvalidConfig(String),
    OutputExists(String),
    Io(std::io::Error),
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InvalidConfig(msg) => write!(f, "Invalid generator config: {}", msg),
            GenerateError::OutputExists(path) => write!(f, "Output file already exists: {}", path),
            GenerateError::Io(err) => write!(f, "Failed to write log: {}", err),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenerateError {
    fn from(err: std::io::Error) -> Self {
        GenerateError::Io(err)
    }
}

/// Parameters of one synthetic capture run.
#[derive(Debug, Clone)]
pub struct SyntheticRunConfig {
    /// Target frame rate in frames per second.
    pub frame_rate: u32,
    /// Length of the simulated recording in seconds.
    pub duration_seconds: u32,
    /// Per-slot probability that the frame is dropped entirely.
    pub drop_probability: f64,
    /// Standard deviation of the Gaussian timestamp jitter in nanoseconds.
    pub jitter_sigma_ns: f64,
    /// Standard deviation of one brightness random-walk step.
    pub brightness_step_sigma: f64,
    /// Constant upward drift added to every emitted frame's brightness.
    pub brightness_drift: f64,
    /// Brightness value before the first step.
    pub start_brightness: f64,
    /// Monotonic timestamp of slot 0 in nanoseconds.
    pub start_timestamp_ns: i64,
    /// Seed for the run's random source.
    pub random_seed: u64,
    /// Device identifier written into every record.
    pub device_id: String,
}

impl Default for SyntheticRunConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30,
            duration_seconds: 60,
            drop_probability: 0.01,
            jitter_sigma_ns: DEFAULT_JITTER_SIGMA_NS,
            brightness_step_sigma: 0.1,
            brightness_drift: 0.001,
            start_brightness: 100.0,
            start_timestamp_ns: DEFAULT_START_TIMESTAMP_NS,
            random_seed: 0,
            device_id: "cam_front".to_string(),
        }
    }
}

impl SyntheticRunConfig {
    /// Validate the configuration before a run.
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are usable, `Err` with a description of
    /// the first offending parameter otherwise.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.frame_rate == 0 {
            return Err(GenerateError::InvalidConfig("frame_rate must be at least 1".to_string()));
        }
        if !(0.0..=1.0).contains(&self.drop_probability) {
            return Err(GenerateError::InvalidConfig(format!(
                "drop_probability {} outside [0, 1]",
                self.drop_probability
            )));
        }
        if !self.jitter_sigma_ns.is_finite() || self.jitter_sigma_ns < 0.0 {
            return Err(GenerateError::InvalidConfig(format!(
                "jitter_sigma_ns {} must be finite and non-negative",
                self.jitter_sigma_ns
            )));
        }
        if !self.brightness_step_sigma.is_finite() || self.brightness_step_sigma < 0.0 {
            return Err(GenerateError::InvalidConfig(format!(
                "brightness_step_sigma {} must be finite and non-negative",
                self.brightness_step_sigma
            )));
        }
        Ok(())
    }

    /// Number of nominal frame slots in the run.
    pub fn slot_count(&self) -> u64 {
        self.frame_rate as u64 * self.duration_seconds as u64
    }
}

/// Counts reported by a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Records actually written to the log.
    pub records_written: usize,
    /// Nominal slots skipped by the drop draw.
    pub slots_dropped: usize,
}

/// Generate a synthetic frame log at `path`.
///
/// Walks every nominal frame slot once. A dropped slot advances the
/// brightness walk (without drift) but emits nothing; its sequence number
/// is skipped. An emitted record carries the slot index as its sequence
/// number and the jittered nominal timestamp, clamped so `ts_mono_ns`
/// never decreases.
///
/// Refuses to overwrite an existing file.
///
/// # Parameters
///
/// * `path` - Destination of the line-delimited JSON log
/// * `config` - Validated run parameters
///
/// # Returns
///
/// Counts of written and dropped slots, or the first error encountered.
pub fn generate_frame_log(path: &Path, config: &SyntheticRunConfig) -> Result<GenerateSummary, GenerateError> {
    config.validate()?;

    if path.exists() {
        return Err(GenerateError::OutputExists(path.display().to_string()));
    }

    // Sigmas are validated above, so sampler construction cannot fail.
    let jitter = Normal::new(0.0, config.jitter_sigma_ns).expect("invalid jitter sigma");
    let brightness_step = Normal::new(0.0, config.brightness_step_sigma).expect("invalid brightness sigma");
    let mut rng = StdRng::seed_from_u64(config.random_seed);

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut brightness = config.start_brightness;
    let mut last_ts_mono_ns = i64::MIN;
    let mut records_written = 0usize;
    let mut slots_dropped = 0usize;

    for slot in 0..config.slot_count() {
        if rng.gen_range(0.0..1.0) < config.drop_probability {
            // The walk continues while the frame is lost; no drift term.
            brightness += brightness_step.sample(&mut rng);
            slots_dropped += 1;
            continue;
        }

        let nominal_ns =
            config.start_timestamp_ns + ((slot as f64 / config.frame_rate as f64) * 1e9) as i64;
        let mut ts_mono_ns = nominal_ns + jitter.sample(&mut rng) as i64;
        // Monotonic clock readings never go backwards.
        if ts_mono_ns < last_ts_mono_ns {
            ts_mono_ns = last_ts_mono_ns;
        }
        last_ts_mono_ns = ts_mono_ns;

        brightness += brightness_step.sample(&mut rng) + config.brightness_drift;

        let record = FrameRecord {
            seq: slot,
            ts_mono_ns,
            ts_wall_ns: ts_mono_ns,
            device_id: Some(config.device_id.clone()),
            brightness,
        };
        let line = serde_json::to_string(&record).map_err(std::io::Error::from)?;
        writeln!(writer, "{}", line)?;
        records_written += 1;
    }

    writer.flush()?;

    Ok(GenerateSummary {
        records_written,
        slots_dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_config(drop_probability: f64, random_seed: u64) -> SyntheticRunConfig {
        SyntheticRunConfig {
            frame_rate: 30,
            duration_seconds: 5,
            drop_probability,
            random_seed,
            ..SyntheticRunConfig::default()
        }
    }

    #[test]
    fn test_zero_drop_rate_emits_every_slot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("full.jsonl");
        let summary = generate_frame_log(&path, &test_config(0.0, 1)).unwrap();

        assert_eq!(summary.records_written, 150);
        assert_eq!(summary.slots_dropped, 0);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 150);
    }

    #[test]
    fn test_same_seed_produces_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a.jsonl");
        let second = dir.path().join("b.jsonl");
        let config = test_config(0.05, 42);

        generate_frame_log(&first, &config).unwrap();
        generate_frame_log(&second, &config).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn test_drop_count_tracks_drop_probability() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("drops.jsonl");
        let config = SyntheticRunConfig {
            frame_rate: 30,
            duration_seconds: 60,
            drop_probability: 0.1,
            random_seed: 7,
            ..SyntheticRunConfig::default()
        };
        let summary = generate_frame_log(&path, &config).unwrap();

        assert_eq!(summary.records_written + summary.slots_dropped, 1800);
        // 10% of 1800 slots, with generous sampling tolerance.
        assert!(summary.slots_dropped > 120, "dropped {}", summary.slots_dropped);
        assert!(summary.slots_dropped < 240, "dropped {}", summary.slots_dropped);
    }

    #[test]
    fn test_timestamps_never_decrease() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.jsonl");
        generate_frame_log(&path, &test_config(0.02, 3)).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut last = i64::MIN;
        for line in contents.lines() {
            let record: crate::record::FrameRecord = serde_json::from_str(line).unwrap();
            assert!(record.ts_mono_ns >= last);
            last = record.ts_mono_ns;
        }
    }

    #[test]
    fn test_generated_log_parses_with_zero_drops() {
        use crate::analyzer::{FrameLog, intervals_ms, load_frame_log};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clean.jsonl");
        generate_frame_log(&path, &test_config(0.0, 11)).unwrap();

        let series = match load_frame_log(&path).unwrap() {
            FrameLog::Series(s) => s,
            FrameLog::Insufficient { .. } => panic!("Expected a full series"),
        };
        assert_eq!(series.record_count(), 150);
        assert_eq!(series.drop_count, 0);
        assert_eq!(intervals_ms(&series.ts_mono_ns).len(), 149);
    }

    #[test]
    fn test_generated_drops_show_up_as_sequence_gaps() {
        use crate::analyzer::{FrameLog, load_frame_log};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gappy.jsonl");
        let config = SyntheticRunConfig {
            frame_rate: 30,
            duration_seconds: 60,
            drop_probability: 0.1,
            random_seed: 7,
            ..SyntheticRunConfig::default()
        };
        let summary = generate_frame_log(&path, &config).unwrap();

        let series = match load_frame_log(&path).unwrap() {
            FrameLog::Series(s) => s,
            FrameLog::Insufficient { .. } => panic!("Expected a full series"),
        };
        assert_eq!(series.record_count(), summary.records_written);
        // Gaps before the first or after the last record are invisible
        // to the sequence-based count.
        assert!(series.drop_count <= summary.slots_dropped as u64);
        assert!(series.drop_count > 0);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("existing.jsonl");
        fs::write(&path, "keep me").unwrap();

        let result = generate_frame_log(&path, &test_config(0.0, 0));
        assert!(matches!(result, Err(GenerateError::OutputExists(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never.jsonl");

        let mut config = test_config(1.5, 0);
        assert!(matches!(
            generate_frame_log(&path, &config),
            Err(GenerateError::InvalidConfig(_))
        ));

        config = test_config(0.0, 0);
        config.frame_rate = 0;
        assert!(matches!(
            generate_frame_log(&path, &config),
            Err(GenerateError::InvalidConfig(_))
        ));

        config = test_config(0.0, 0);
        config.jitter_sigma_ns = -1.0;
        assert!(matches!(
            generate_frame_log(&path, &config),
            Err(GenerateError::InvalidConfig(_))
        ));
    }
}
