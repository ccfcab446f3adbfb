//! Domain layer for fact-counter
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Fact**: a short piece of number trivia fetched from an external service
//! - **Target word**: the word a caller wants counted, compared case-insensitively
//! - **Count mode**: token equality (default) or substring matching
//! - **FactError**: the closed set of four failures a caller can observe

pub mod config;
pub mod core;
pub mod counting;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::{
        BAD_REQUEST_MESSAGE, CONNECTION_MESSAGE, FactError, INTERNAL_ERROR_MESSAGE,
        TIMEOUT_MESSAGE,
    },
    fact::FactText,
    word::TargetWord,
};
pub use counting::{CountMode, WordCount, count_occurrences};
