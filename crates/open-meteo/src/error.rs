//! Upstream client error types.

use thiserror::Error;

/// Errors from a single upstream fetch.
///
/// Every variant surfaces to clients as a generic 500; the detail is for
/// server-side logs only.
#[derive(Debug, Error)]
pub enum MeteoError {
    /// Transport-level failure (DNS, connect, timeout).
    #[error("Upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response body could not be read.
    #[error("Failed to read upstream response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MeteoError {
    /// Whether the failure happened before a body was decoded.
    ///
    /// Distinguishes "fetch" failures from "parse" failures in
    /// client-facing messages.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, MeteoError::Request(_) | MeteoError::Body(_))
    }
}
