//! Domain error types

use thiserror::Error;

/// Message surfaced when the fact request runs out of time.
pub const TIMEOUT_MESSAGE: &str = "Time has been limit reached";
/// Message surfaced when the fact service cannot be reached.
pub const CONNECTION_MESSAGE: &str = "Connection hang out";
/// Message surfaced when the fact service answers with a non-2xx status.
pub const BAD_REQUEST_MESSAGE: &str = "Bad request";
/// Message surfaced for any failure that was not classified at the fetch boundary.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Closed set of failures a caller of the word counter can observe.
///
/// The display text is fixed per kind; the underlying transport detail is
/// logged where the error is classified and never carried past that point.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactError {
    #[error("{}", TIMEOUT_MESSAGE)]
    Timeout,

    #[error("{}", CONNECTION_MESSAGE)]
    ConnectionFailure,

    #[error("{}", BAD_REQUEST_MESSAGE)]
    BadRequest,

    #[error("{}", INTERNAL_ERROR_MESSAGE)]
    InternalError,
}

impl FactError {
    /// Short machine-readable name of the kind
    pub fn kind(&self) -> &'static str {
        match self {
            FactError::Timeout => "timeout",
            FactError::ConnectionFailure => "connection_failure",
            FactError::BadRequest => "bad_request",
            FactError::InternalError => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_fixed() {
        assert_eq!(FactError::Timeout.to_string(), "Time has been limit reached");
        assert_eq!(FactError::ConnectionFailure.to_string(), "Connection hang out");
        assert_eq!(FactError::BadRequest.to_string(), "Bad request");
        assert_eq!(FactError::InternalError.to_string(), "Internal Server Error");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(FactError::BadRequest.kind(), "bad_request");
        assert_eq!(FactError::InternalError.kind(), "internal_error");
    }
}
