//! Errors surfaced by transports and the authenticated fetch wrapper.

/// A request that never produced a usable response.
///
/// HTTP-level failures (non-2xx statuses) are not errors here; they come back
/// as ordinary responses and each flow decides what to do with them.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network request failed: {0}")]
    Network(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("browser API error: {0}")]
    Browser(String),
    #[error("invalid request URL `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },
}
