//! Occurrence counting over a fact

use super::mode::CountMode;
use crate::core::{fact::FactText, word::TargetWord};
use serde::{Deserialize, Serialize};

/// Count how often `word` occurs in `fact` under the given mode.
///
/// Both sides are compared lower-cased. Pure: the same inputs always give
/// the same count.
pub fn count_occurrences(fact: &FactText, word: &TargetWord, mode: CountMode) -> usize {
    let normalized = fact.normalized();
    match mode {
        CountMode::Token => normalized
            .split_whitespace()
            .filter(|token| *token == word.as_str())
            .count(),
        CountMode::Substring => {
            let joined = normalized.split_whitespace().collect::<Vec<_>>().join(" ");
            joined.matches(word.as_str()).count()
        }
    }
}

/// Result of counting a word in one fact (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The lower-cased word that was counted
    pub word: String,
    /// Number of occurrences found
    pub count: usize,
    /// Mode used to count
    pub mode: CountMode,
    /// The fact the word was counted in
    pub fact: String,
}

impl WordCount {
    /// Count `word` in `fact` and keep the inputs alongside the result
    pub fn compute(fact: &FactText, word: &TargetWord, mode: CountMode) -> Self {
        Self {
            word: word.as_str().to_string(),
            count: count_occurrences(fact, word, mode),
            mode,
            fact: fact.content().to_string(),
        }
    }
}
