//! Buffered line reading for finite line-delimited logs.
//!
//! Reads a complete log file sequentially from the start, skipping blank
//! lines and tracking line numbers so parse errors can point at the
//! offending line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Buffer size for reading log files (8KB).
const BUFFER_SIZE: usize = 8 * 1024;

/// Sequential reader over a finite log file.
pub struct LogLoader {
    reader: BufReader<File>,
    line_buffer: String,
    line_number: usize,
}

impl LogLoader {
    /// Open a log file for sequential reading.
    ///
    /// # Parameters
    ///
    /// * `path` - Path to the log file
    ///
    /// # Returns
    ///
    /// `Ok(LogLoader)` if the file opens successfully, `Err` otherwise.
    pub fn open(path: &Path) -> Result<Self, std::io::Error> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(BUFFER_SIZE, file);

        Ok(Self {
            reader,
            line_buffer: String::with_capacity(512),
            line_number: 0,
        })
    }

    /// Read the next non-empty line from the log file.
    ///
    /// # Returns
    ///
    /// `Ok(Some((line_number, line)))` while content remains, with line
    /// numbers counted from 1 including skipped blank lines; `Ok(None)`
    /// at EOF.
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>, std::io::Error> {
        loop {
            self.line_buffer.clear();

            match self.reader.read_line(&mut self.line_buffer)? {
                0 => return Ok(None),
                _ => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim_end();
                    if !line.is_empty() {
                        return Ok(Some((self.line_number, line.to_string())));
                    }
                    // Skip empty lines
                }
            }
        }
    }
}
