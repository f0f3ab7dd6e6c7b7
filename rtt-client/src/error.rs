//! RTT client error types.

/// Errors from path construction or the RTT HTTP client.
///
/// `EmptyLocation` and `OriginEqualsDestination` are detected before any
/// request is sent; the remaining variants describe transport, status, or
/// decoding failures after the fact.
#[derive(Debug, thiserror::Error)]
pub enum RttError {
    /// A required location or service identifier was empty
    #[error("empty location or service identifier")]
    EmptyLocation,

    /// Origin and destination were the same station in a route query
    #[error("origin and destination are the same location ({0})")]
    OriginEqualsDestination(String),

    /// RTT rejected the supplied credentials
    #[error("authentication failed: RTT rejected the supplied credentials")]
    AuthenticationFailed,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Response body, truncated, for diagnostics.
        body: Option<String>,
    },

    /// Base URL could not be parsed or a path could not be resolved against it
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}
