//! Application-level configuration.
//!
//! - [`CountConfig`]: how the word counter counts and what it reports as
//!   the failing operation

pub mod count_config;

pub use count_config::CountConfig;
