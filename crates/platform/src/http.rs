//! HTTP Document Fetching
//!
//! The [`HttpFetcher`] capability fetches a JSON document from a URL.
//! [`ReqwestFetcher`] is the production implementation; tests substitute
//! their own implementations of the trait.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Error Types
// ============================================================================

/// Transport-level fetch failure
///
/// Every variant means "no document could be obtained"; callers that treat
/// documents as optional can recover from all of them alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network failure, timeout, or invalid URL
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server returned status: {0}")]
    Status(u16),

    /// Body is not valid JSON
    #[error("Invalid JSON body: {0}")]
    Decode(String),
}

// ============================================================================
// Capability
// ============================================================================

/// A fetched document
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body (`Value::Null` for an empty body)
    pub body: Value,
}

impl FetchResponse {
    /// Successful response carrying `body`
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }
}

/// Trait for HTTP document fetchers
#[trait_variant::make(HttpFetcher: Send)]
pub trait LocalHttpFetcher {
    /// GET `url` and decode the body as JSON
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}

// ============================================================================
// reqwest implementation
// ============================================================================

/// [`HttpFetcher`] backed by a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Build a fetcher with its own client
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpFetcher for ReqwestFetcher {
    async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        tracing::debug!(url = %url, bytes = bytes.len(), "Fetched document");

        Ok(FetchResponse {
            status: status.as_u16(),
            body: decode_body(&bytes)?,
        })
    }
}

/// Decode a response body; blank bodies become `Value::Null`
fn decode_body(bytes: &[u8]) -> Result<Value, FetchError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(bytes).map_err(|e| FetchError::Decode(e.to_string()))
}
