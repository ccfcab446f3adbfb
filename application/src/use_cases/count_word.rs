//! Count Word use case
//!
//! Fetches one fact and counts a word in it. This is the only boundary
//! where failures leave the application layer, so it is also where each
//! failure is recorded in the diagnostic log.

use crate::config::CountConfig;
use crate::ports::diagnostic_logger::{DiagnosticLogger, DiagnosticRecord, NoDiagnosticLogger};
use crate::ports::fact_source::FactSource;
use factcount_domain::{FactError, TargetWord, WordCount};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info};

/// A failure together with the detail written to the diagnostic log
struct Failure {
    error: FactError,
    detail: String,
}

impl From<FactError> for Failure {
    fn from(error: FactError) -> Self {
        Self {
            detail: error.to_string(),
            error,
        }
    }
}

/// Use case for counting a word in a freshly fetched fact
///
/// Classified errors from the [`FactSource`] are returned unchanged. Anything
/// else that goes wrong on the counting path (a panicking source, for
/// instance) is returned as [`FactError::InternalError`].
pub struct CountWordUseCase<S: FactSource + 'static> {
    source: Arc<S>,
    logger: Arc<dyn DiagnosticLogger>,
    config: CountConfig,
}

impl<S: FactSource + 'static> CountWordUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            logger: Arc::new(NoDiagnosticLogger),
            config: CountConfig::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn DiagnosticLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_config(mut self, config: CountConfig) -> Self {
        self.config = config;
        self
    }

    /// Count `word` in one fact and return the number of occurrences
    pub async fn count_occurrences(&self, word: &str) -> Result<usize, FactError> {
        self.execute(TargetWord::new(word))
            .await
            .map(|result| result.count)
    }

    /// Execute the use case
    ///
    /// Writes exactly one diagnostic record when the call fails and none
    /// when it succeeds.
    pub async fn execute(&self, word: impl Into<TargetWord>) -> Result<WordCount, FactError> {
        let word = word.into();
        info!(
            "Counting '{}' in fact from {} ({} mode)",
            word,
            self.source.describe(),
            self.config.mode
        );

        let outcome = AssertUnwindSafe(self.count(&word)).catch_unwind().await;
        let failure = match outcome {
            Ok(Ok(result)) => {
                debug!("Found {} occurrence(s) of '{}'", result.count, word);
                return Ok(result);
            }
            Ok(Err(failure)) => failure,
            Err(payload) => Failure {
                error: FactError::InternalError,
                detail: format!("unclassified failure: {}", panic_detail(&*payload)),
            },
        };

        info!(
            "{} failed ({}): {}",
            self.config.operation_name,
            failure.error.kind(),
            failure.detail
        );
        self.logger.log(DiagnosticRecord::failure(
            &self.config.operation_name,
            &failure.detail,
        ));
        Err(failure.error)
    }

    async fn count(&self, word: &TargetWord) -> Result<WordCount, Failure> {
        let fact = self.source.fetch_fact().await?;
        Ok(WordCount::compute(&fact, word, self.config.mode))
    }
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
