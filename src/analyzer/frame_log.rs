//! Frame-log parsing, ordering validation, and drop counting.
//!
//! Reads a complete frame log into columnar series (sequence numbers,
//! monotonic timestamps, brightness). Sequence numbers must be strictly
//! increasing; out-of-order or duplicate values are rejected rather than
//! silently producing a wrong drop count.

use std::path::Path;

use super::LogReadError;
use super::log_loader::LogLoader;
use crate::record::FrameRecord;

/// Columnar view of a fully parsed frame log.
#[derive(Debug, Clone)]
pub struct FrameSeries {
    /// Sequence numbers, strictly increasing.
    pub seqs: Vec<u64>,
    /// Monotonic timestamps in nanoseconds, one per record.
    pub ts_mono_ns: Vec<i64>,
    /// Brightness values, one per record.
    pub brightness: Vec<f64>,
    /// Frames never written to the log, inferred from sequence gaps.
    pub drop_count: u64,
}

impl FrameSeries {
    /// Number of records in the log.
    pub fn record_count(&self) -> usize {
        self.seqs.len()
    }
}

/// Outcome of reading a frame log.
#[derive(Debug)]
pub enum FrameLog {
    /// Fewer than two records are present; no interval metrics can be
    /// derived from the log.
    Insufficient { records: usize },
    /// The log parsed and validated completely.
    Series(FrameSeries),
}

/// Load and parse a line-delimited frame log.
///
/// Every line is parsed independently; the first malformed line fails
/// the whole operation with the line number. Logs with fewer than two
/// records return [`FrameLog::Insufficient`] instead of a series.
///
/// # Parameters
///
/// * `path` - Path to the line-delimited JSON frame log
///
/// # Returns
///
/// The parsed series (or the insufficient-data outcome), or the first
/// read, parse, or validation error.
pub fn load_frame_log(path: &Path) -> Result<FrameLog, LogReadError> {
    let mut loader = LogLoader::open(path)
        .map_err(|e| LogReadError::FileRead(format!("{}: {}", path.display(), e)))?;

    let mut seqs = Vec::new();
    let mut ts_mono_ns = Vec::new();
    let mut brightness = Vec::new();

    while let Some((line_number, line)) = loader
        .next_line()
        .map_err(|e| LogReadError::FileRead(format!("{}: {}", path.display(), e)))?
    {
        let record: FrameRecord = serde_json::from_str(&line).map_err(|e| LogReadError::Parse {
            line: line_number,
            message: e.to_string(),
        })?;
        seqs.push(record.seq);
        ts_mono_ns.push(record.ts_mono_ns);
        brightness.push(record.brightness);
    }

    if seqs.len() < 2 {
        return Ok(FrameLog::Insufficient { records: seqs.len() });
    }

    validate_sequence(&seqs)?;
    let drop_count = sequence_drop_count(&seqs);

    Ok(FrameLog::Series(FrameSeries {
        seqs,
        ts_mono_ns,
        brightness,
        drop_count,
    }))
}

/// Check that sequence numbers are strictly increasing.
fn validate_sequence(seqs: &[u64]) -> Result<(), LogReadError> {
    for window in seqs.windows(2) {
        if window[1] <= window[0] {
            return Err(LogReadError::Validation(format!(
                "sequence numbers not strictly increasing: {} followed by {}",
                window[0], window[1]
            )));
        }
    }
    Ok(())
}

/// Count dropped frames from the sequence numbers actually present.
///
/// `drop_count = (last_seq - first_seq + 1) - record_count`. The input
/// must be non-empty and strictly increasing, which makes the result
/// non-negative.
pub fn sequence_drop_count(seqs: &[u64]) -> u64 {
    let first = seqs[0];
    let last = seqs[seqs.len() - 1];
    last - first + 1 - seqs.len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_log(lines: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frames.jsonl");
        fs::write(&path, lines.join("\n")).unwrap();
        (dir, path)
    }

    fn frame_line(seq: u64, ts_mono_ns: i64) -> String {
        format!(
            "{{\"seq\":{},\"ts_mono_ns\":{},\"ts_wall_ns\":{},\"device_id\":\"cam_front\",\"brightness\":100.0}}",
            seq, ts_mono_ns, ts_mono_ns
        )
    }

    #[test]
    fn test_drop_count_from_sequence_gap() {
        let lines: Vec<String> = [(0, 0), (1, 10_000_000), (3, 25_000_000), (4, 40_000_000)]
            .iter()
            .map(|&(seq, ts)| frame_line(seq, ts))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (_dir, path) = write_log(&refs);

        let series = match load_frame_log(&path).unwrap() {
            FrameLog::Series(s) => s,
            FrameLog::Insufficient { .. } => panic!("Expected a full series"),
        };
        assert_eq!(series.record_count(), 4);
        assert_eq!(series.drop_count, 1);
        assert_eq!(series.ts_mono_ns, vec![0, 10_000_000, 25_000_000, 40_000_000]);
    }

    #[test]
    fn test_single_record_is_insufficient() {
        let line = frame_line(0, 0);
        let (_dir, path) = write_log(&[line.as_str()]);

        match load_frame_log(&path).unwrap() {
            FrameLog::Insufficient { records } => assert_eq!(records, 1),
            FrameLog::Series(_) => panic!("Expected insufficient data"),
        }
    }

    #[test]
    fn test_empty_log_is_insufficient() {
        let (_dir, path) = write_log(&[]);

        match load_frame_log(&path).unwrap() {
            FrameLog::Insufficient { records } => assert_eq!(records, 0),
            FrameLog::Series(_) => panic!("Expected insufficient data"),
        }
    }

    #[test]
    fn test_malformed_line_fails_with_line_number() {
        let first = frame_line(0, 0);
        let third = frame_line(1, 10_000_000);
        let (_dir, path) = write_log(&[first.as_str(), "not json", third.as_str()]);

        match load_frame_log(&path) {
            Err(LogReadError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_order_sequence_rejected() {
        let lines: Vec<String> = [(0, 0), (2, 10_000_000), (1, 25_000_000)]
            .iter()
            .map(|&(seq, ts)| frame_line(seq, ts))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (_dir, path) = write_log(&refs);

        assert!(matches!(load_frame_log(&path), Err(LogReadError::Validation(_))));
    }

    #[test]
    fn test_duplicate_sequence_rejected() {
        let lines: Vec<String> = [(0, 0), (1, 10_000_000), (1, 25_000_000)]
            .iter()
            .map(|&(seq, ts)| frame_line(seq, ts))
            .collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let (_dir, path) = write_log(&refs);

        assert!(matches!(load_frame_log(&path), Err(LogReadError::Validation(_))));
    }

    #[test]
    fn test_sequence_drop_count_contiguous() {
        assert_eq!(sequence_drop_count(&[5, 6, 7, 8]), 0);
        assert_eq!(sequence_drop_count(&[0, 1, 3, 4]), 1);
        assert_eq!(sequence_drop_count(&[10, 20]), 9);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.jsonl");
        assert!(matches!(load_frame_log(&path), Err(LogReadError::FileRead(_))));
    }
}
