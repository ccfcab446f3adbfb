//! Application layer for fact-counter
//!
//! This crate contains the word counting use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CountConfig, count_config::DEFAULT_OPERATION_NAME};
pub use ports::{
    diagnostic_logger::{DiagnosticLogger, DiagnosticRecord, NoDiagnosticLogger, Severity},
    fact_source::FactSource,
};
pub use use_cases::count_word::CountWordUseCase;
