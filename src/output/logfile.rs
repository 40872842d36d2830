use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use super::Level;

/// Append-only, timestamped log of scan events.
///
/// Backs the `-o/--output` flag. Writes are serialized through a mutex, so
/// one `LogFile` may sit behind reporters on more than one thread. A failed
/// append degrades to a note on stderr; it never aborts the scan.
pub struct LogFile {
    file: Mutex<File>,
}

impl LogFile {
    /// Creates the log file at `path`, truncating any previous contents.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Could not write to output file {}", path.display()))?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one `[timestamp] [LEVEL] message` line.
    pub fn append(&self, level: Level, message: &str) {
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(err) = writeln!(file, "[{timestamp}] [{level}] {message}") {
            eprintln!("Failed to write to output file: {err}");
        }
    }
}
