//! Transport failures.

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The request produced no HTTP response.
///
/// The API client surfaces these unchanged inside
/// [`Error::Transport`](crate::Error::Transport).
#[derive(Debug, Error)]
pub enum HttpError {
    /// DNS failure, refused connection, reset mid-exchange, TLS failure.
    #[error("Connection error: {0}")]
    Connection(#[source] BoxError),

    /// The connect timeout or the overall request timeout elapsed.
    #[error("Request timed out")]
    Timeout,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The configured proxy could not be used.
    #[error("Invalid proxy configuration: {0}")]
    Proxy(String),

    /// The reqwest client could not be built, or a header value was rejected.
    #[error("Failed to set up HTTP client: {0}")]
    Setup(#[source] BoxError),
}
