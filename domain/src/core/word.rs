//! Target word value object

use serde::{Deserialize, Serialize};

/// The word a caller wants counted (Value Object)
///
/// Stored lower-cased so every comparison against a fact is
/// case-insensitive. No other validation is applied: an empty word is a
/// legal value and counts according to the selected
/// [`CountMode`](crate::counting::CountMode).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetWord {
    normalized: String,
}

impl TargetWord {
    pub fn new(word: impl AsRef<str>) -> Self {
        Self {
            normalized: word.as_ref().to_lowercase(),
        }
    }

    /// The lower-cased word
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl std::fmt::Display for TargetWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl From<&str> for TargetWord {
    fn from(s: &str) -> Self {
        TargetWord::new(s)
    }
}

impl From<String> for TargetWord {
    fn from(s: String) -> Self {
        TargetWord::new(s)
    }
}
