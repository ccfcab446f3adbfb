//! Reqwest-backed numbers API fact source.
//!
//! This adapter owns transport details only: URL construction, the request
//! timeout, and the mapping of transport and HTTP failures onto
//! [`FactError`].

use async_trait::async_trait;
use factcount_application::FactSource;
use factcount_domain::{FactError, FactText};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Base URL of the public numbers API
pub const DEFAULT_BASE_URL: &str = "http://numbersapi.com";
/// Number whose fact is fetched when none is configured
pub const DEFAULT_FACT_NUMBER: u64 = 34;
/// Request timeout in seconds when none is configured
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const USER_AGENT: &str = "fact-counter/0.1";

/// Errors raised while building the adapter (never while fetching)
#[derive(Error, Debug)]
pub enum SourceSetupError {
    #[error("invalid fact URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Build the URL of the fact for `number` under `base_url`.
pub fn fact_url(base_url: &str, number: u64) -> Result<Url, SourceSetupError> {
    let raw = format!("{}/{}", base_url.trim_end_matches('/'), number);
    let url = Url::parse(&raw).map_err(|e| SourceSetupError::InvalidUrl {
        url: raw.clone(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SourceSetupError::UnsupportedScheme(other.to_string())),
    }
}

/// Fact source that performs one HTTP GET against a fixed URL.
pub struct NumbersApiFactSource {
    client: Client,
    url: Url,
}

impl NumbersApiFactSource {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// The timeout bounds the whole request, from connecting to reading the
    /// last byte of the body.
    pub fn new(url: Url, timeout: Duration) -> Result<Self, SourceSetupError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, url })
    }

    /// Build an adapter for the fact about `number` under `base_url`.
    pub fn for_number(
        base_url: &str,
        number: u64,
        timeout: Duration,
    ) -> Result<Self, SourceSetupError> {
        Self::new(fact_url(base_url, number)?, timeout)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl FactSource for NumbersApiFactSource {
    async fn fetch_fact(&self) -> Result<FactText, FactError> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| map_transport_error(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(map_status_error(&self.url, status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| map_transport_error(&self.url, e))?;
        debug!("Received {} bytes from {}", body.len(), self.url);
        Ok(FactText::new(body))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

fn map_transport_error(url: &Url, error: reqwest::Error) -> FactError {
    debug!("Fact request to {} failed: {}", url, error);
    if error.is_timeout() {
        FactError::Timeout
    } else {
        FactError::ConnectionFailure
    }
}

fn map_status_error(url: &Url, status: StatusCode) -> FactError {
    debug!(
        "Fact request to {} returned {} {}",
        url,
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    FactError::BadRequest
}
