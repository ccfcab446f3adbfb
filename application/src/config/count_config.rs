//! Count parameters: use case behavior control.

use factcount_domain::CountMode;

/// Operation name written to the diagnostic log when counting fails.
pub const DEFAULT_OPERATION_NAME: &str = "count_occurrences";

/// Word counter behavior.
///
/// Counting mode is chosen once per process; callers that need the other
/// mode build a second use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    /// How occurrences are counted
    pub mode: CountMode,
    /// Name reported in diagnostic records
    pub operation_name: String,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            mode: CountMode::default(),
            operation_name: DEFAULT_OPERATION_NAME.to_string(),
        }
    }
}

impl CountConfig {
    pub fn with_mode(mut self, mode: CountMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = name.into();
        self
    }
}
