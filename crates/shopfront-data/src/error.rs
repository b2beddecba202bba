//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to a backend service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not reach the server. In browsers this also covers
    /// CORS rejections, which fetch reports as opaque network failures.
    #[error("Unreachable: {0}")]
    Unreachable(String),

    /// Failed to build or send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status} for {url}")]
    HttpError { status: u16, url: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::ParseError(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_decode() {
            FetchError::ParseError(e.to_string())
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::HttpError {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if is_connect(&e) || e.is_request() {
            FetchError::Unreachable(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn is_connect(e: &reqwest::Error) -> bool {
    e.is_connect()
}

#[cfg(target_arch = "wasm32")]
fn is_connect(_e: &reqwest::Error) -> bool {
    false
}
