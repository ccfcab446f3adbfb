//! Fact text value object

use serde::{Deserialize, Serialize};

/// A number fact as returned by the fact service (Value Object)
///
/// Created once per fetch and owned by whoever asked for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactText {
    content: String,
}

impl FactText {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the fact content as received
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lower-cased copy of the content, used for case-insensitive counting
    pub fn normalized(&self) -> String {
        self.content.to_lowercase()
    }
}

impl std::fmt::Display for FactText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for FactText {
    fn from(s: &str) -> Self {
        FactText::new(s)
    }
}

impl From<String> for FactText {
    fn from(s: String) -> Self {
        FactText::new(s)
    }
}
