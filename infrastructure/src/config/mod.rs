//! Configuration file loading for fact-counter
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FACT_COUNTER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./fact-counter.toml` or `./.fact-counter.toml`
//! 4. Global: `$XDG_CONFIG_HOME/fact-counter/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top of the result by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileCountingConfig, FileFactConfig, FileLogConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;
