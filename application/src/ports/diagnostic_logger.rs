//! Port for the diagnostic log.
//!
//! Defines the [`DiagnosticLogger`] trait used to record every failure that
//! leaves the word counter.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! verbose runtime diagnostics that the user opts into with `-v`, while this
//! port captures one durable record per failed invocation.

use std::fmt;

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Upper-case level name as written to the log
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic record.
///
/// The timestamp and logger name are added by the implementation at write
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticRecord {
    pub severity: Severity,
    pub message: String,
}

impl DiagnosticRecord {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Record for a failure that propagated out of `operation`.
    pub fn failure(operation: &str, detail: impl fmt::Display) -> Self {
        Self::new(
            Severity::Error,
            format!("Exception in function {}: {}", operation, detail),
        )
    }
}

/// Port for writing diagnostic records.
///
/// Implementations append each record as a single entry. The `log` method is
/// synchronous and non-fallible: a failure to write the log must never change
/// the outcome of the operation being logged.
pub trait DiagnosticLogger: Send + Sync {
    /// Record a diagnostic entry.
    fn log(&self, record: DiagnosticRecord);
}

/// No-op implementation for tests and when the diagnostic log is disabled.
pub struct NoDiagnosticLogger;

impl DiagnosticLogger for NoDiagnosticLogger {
    fn log(&self, _record: DiagnosticRecord) {}
}
