//! Errors returned by [`ApiClient`](crate::client::ApiClient) operations.

use thiserror::Error;

use crate::codec::{DecodeError, EncodeError};
use crate::config::ConfigError;
use crate::transport::HttpError;
use crate::validation::ValidationError;

/// The service answered with a status other than 200.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("HTTP {status}: {message}")]
pub struct HttpResponseError {
    /// Status reported to the caller; unexpected codes collapse to 500.
    pub status: u16,
    /// Server-supplied error text or a fixed fallback.
    pub message: String,
}

impl HttpResponseError {
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Error type for a single API operation.
///
/// Exactly one variant is returned per failed call; the client never
/// recovers or retries on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// The payload failed validation; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request never produced an HTTP response.
    #[error(transparent)]
    Transport(#[from] HttpError),

    /// The service rejected the request.
    #[error(transparent)]
    HttpResponse(#[from] HttpResponseError),

    /// A 200 reply that could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The client configuration cannot produce a request.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Extension trait for checking if an error is retryable.
///
/// The client itself never retries; callers use this to decide whether
/// issuing the same request again could succeed.
pub trait IsRetryable {
    /// Returns true if the error is potentially transient.
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for HttpError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) | Self::Timeout => true,
            Self::InvalidUrl(_) | Self::Proxy(_) | Self::Setup(_) => false,
        }
    }
}

impl IsRetryable for HttpResponseError {
    fn is_retryable(&self) -> bool {
        self.status == http::StatusCode::GATEWAY_TIMEOUT.as_u16()
    }
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_retryable(),
            Self::HttpResponse(e) => e.is_retryable(),
            Self::Validation(_) | Self::Decode(_) | Self::Encode(_) | Self::Config(_) => false,
        }
    }
}
