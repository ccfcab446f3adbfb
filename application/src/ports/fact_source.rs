//! Fact source port
//!
//! Defines the single I/O boundary of the word counter: fetching one fact.

use async_trait::async_trait;
use factcount_domain::{FactError, FactText};

/// Source of number facts
///
/// Implementations perform exactly one attempt per call and classify every
/// failure into a [`FactError`] before returning. No raw transport error is
/// allowed to cross this port.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch the fact this source is bound to
    async fn fetch_fact(&self) -> Result<FactText, FactError>;

    /// Human-readable description of where facts come from (used in logs)
    fn describe(&self) -> String {
        "fact source".to_string()
    }
}
