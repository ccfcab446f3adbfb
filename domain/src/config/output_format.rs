//! How a counted result is rendered

use serde::{Deserialize, Serialize};

/// Rendering of a [`WordCount`](crate::WordCount) on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sentence with the count and the fact (default)
    #[default]
    Text,
    /// The bare number, for scripts
    Count,
    /// Pretty-printed JSON object
    Json,
}

impl OutputFormat {
    /// Whether the output is meant to be parsed rather than read
    pub fn is_machine_readable(&self) -> bool {
        !matches!(self, OutputFormat::Text)
    }
}
