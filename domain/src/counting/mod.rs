//! Word counting over fetched facts.
//!
//! - [`mode::CountMode`]: token equality vs substring matching
//! - [`word_count::count_occurrences`]: the pure counting function
//! - [`word_count::WordCount`]: a counted result

pub mod mode;
pub mod word_count;

pub use mode::CountMode;
pub use word_count::{WordCount, count_occurrences};
