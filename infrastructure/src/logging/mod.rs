//! Logging infrastructure: the diagnostic log.
//!
//! Provides [`FileDiagnosticLogger`], an append-only text file writer that
//! implements the [`DiagnosticLogger`](factcount_application::DiagnosticLogger) port.

mod file_logger;

pub use file_logger::{DEFAULT_LOGGER_NAME, FileDiagnosticLogger};
