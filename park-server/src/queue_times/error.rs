//! queue-times client error types.

/// Errors from fetching park data upstream.
///
/// Every variant is mapped to the same empty-board fallback by
/// [`CachedParkFeed::fetch_or_empty`](crate::cache::CachedParkFeed::fetch_or_empty).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network error or timeout before a response arrived.
    #[error("upstream unreachable: {0}")]
    Unreachable(#[from] reqwest::Error),

    /// API answered with a non-2xx status.
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON shape.
    #[error("malformed response: {message}")]
    Malformed {
        message: String,
        body: Option<String>,
    },
}
