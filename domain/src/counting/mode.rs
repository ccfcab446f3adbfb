//! Counting mode definitions.
//!
//! Defines [`CountMode`], which decides what counts as one occurrence of a
//! word inside a fact:
//! - Token: a whitespace-delimited token equal to the word
//! - Substring: any non-overlapping contiguous match of the word

use serde::{Deserialize, Serialize};
use std::fmt;

/// How occurrences of a word are counted in a fact.
///
/// The two modes are not equivalent. For the fact `"ab abab"` and the word
/// `"ab"`, token mode finds 1 occurrence while substring mode finds 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountMode {
    /// Count whitespace-delimited tokens equal to the word
    #[default]
    Token,
    /// Count contiguous matches after re-joining tokens with single spaces
    Substring,
}

impl fmt::Display for CountMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountMode::Token => write!(f, "token"),
            CountMode::Substring => write!(f, "substring"),
        }
    }
}

impl std::str::FromStr for CountMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token" | "tokens" | "word" => Ok(CountMode::Token),
            "substring" | "sub" => Ok(CountMode::Substring),
            _ => Err(format!("Invalid CountMode: {}", s)),
        }
    }
}
