//! Core domain concepts shared across all subdomains.
//!
//! - [`error::FactError`]: the closed set of failures surfaced to callers
//! - [`fact::FactText`]: the text returned by the fact service
//! - [`word::TargetWord`]: the word being counted

pub mod error;
pub mod fact;
pub mod word;
