//! Infrastructure layer for fact-counter
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod numbers_api;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileCountingConfig, FileFactConfig,
    FileLogConfig, FileOutputConfig,
};
pub use logging::{DEFAULT_LOGGER_NAME, FileDiagnosticLogger};
pub use numbers_api::{NumbersApiFactSource, SourceSetupError, fact_url};
