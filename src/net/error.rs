//! Discriminated error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Services propagate these untouched; pages decide presentation. The
//! three kinds map to the layers a call can fail at: transport, HTTP
//! status, and body decoding.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes for a REST call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status, optionally
    /// carrying a backend-supplied detail message.
    #[error("request failed with status {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Serialization(String),
}
