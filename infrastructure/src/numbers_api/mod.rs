//! **Numbers API**: the fact source used by the word counter
//!
//! Fetches plain-text trivia from `http://numbersapi.com/<number>`.
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx | body as [`FactText`](factcount_domain::FactText) |
//! | timeout (connect, send or body) | [`FactError::Timeout`](factcount_domain::FactError::Timeout) |
//! | refused / reset / DNS failure | [`FactError::ConnectionFailure`](factcount_domain::FactError::ConnectionFailure) |
//! | any non-2xx status | [`FactError::BadRequest`](factcount_domain::FactError::BadRequest) |
//!
//! A single attempt is made per call. The raw `reqwest` error is logged via
//! `tracing` at `warn` level before being classified.

mod http_source;

pub use http_source::{
    DEFAULT_BASE_URL, DEFAULT_FACT_NUMBER, DEFAULT_TIMEOUT_SECONDS, NumbersApiFactSource,
    SourceSetupError, fact_url,
};
