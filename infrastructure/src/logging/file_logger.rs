//! Append-only text file writer for diagnostic records.
//!
//! Each [`DiagnosticRecord`] becomes one line:
//!
//! ```text
//! 2026-10-17 09:41:07,512 - JustMyLogger - ERROR - Exception in function count_occurrences: Bad request
//! ```

use chrono::{DateTime, Local};
use factcount_application::{DiagnosticLogger, DiagnosticRecord};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Logger name written into every line when none is configured
pub const DEFAULT_LOGGER_NAME: &str = "JustMyLogger";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Diagnostic logger that appends one text line per record.
///
/// The file is opened once in append mode and never truncated. Thread-safe
/// via `Mutex<BufWriter<File>>`; every record is flushed as it is written.
pub struct FileDiagnosticLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
    name: String,
}

impl FileDiagnosticLogger {
    /// Open (or create) the log at `path`, tagging records with `name`.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>, name: impl Into<String>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create diagnostic log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open diagnostic log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
            name: name.into(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn format_line(&self, record: &DiagnosticRecord, at: DateTime<Local>) -> String {
        format!(
            "{} - {} - {} - {}",
            at.format(TIMESTAMP_FORMAT),
            self.name,
            record.severity,
            // one record per line
            record.message.replace('\n', "\\n")
        )
    }
}

impl DiagnosticLogger for FileDiagnosticLogger {
    fn log(&self, record: DiagnosticRecord) {
        let line = self.format_line(&record, Local::now());

        // a panicking writer elsewhere must not cost later records
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(writer, "{}", line);
        let _ = writer.flush();
    }
}

impl Drop for FileDiagnosticLogger {
    fn drop(&mut self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
