//! Wire-level request/reply values and the client trait.

use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use url::Url;

use super::HttpError;

/// A POST to the review service, ready to be sent.
///
/// The body is the exact byte sequence the signature header was computed
/// over; nothing downstream may re-encode it.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Target URL
    pub url: Url,
    /// Headers to send
    pub headers: HeaderMap,
    /// Encoded JSON body
    pub body: Vec<u8>,
}

impl HttpRequest {
    /// Creates a POST of `body` to `url` with no headers.
    #[must_use]
    pub fn post(url: Url, body: Vec<u8>) -> Self {
        Self {
            url,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// Sets a header, replacing any previous value under the same name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn body_bytes(&self) -> &[u8] {
        &self.body
    }

    /// Returns a header value as text, if present and visible ASCII.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A reply from the review service, fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns the body as a UTF-8 string, if valid.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implemented by [`ReqwestClient`](super::ReqwestClient) for real traffic
/// and by recording mocks in tests. A non-2xx status is still `Ok`; status
/// classification belongs to the API client.
pub trait HttpClient: Send + Sync {
    /// Performs exactly one round trip. Implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no response was received:
    /// - Network connection fails ([`HttpError::Connection`])
    /// - Request times out ([`HttpError::Timeout`])
    /// - URL is rejected by the client ([`HttpError::InvalidUrl`])
    /// - The proxy or client could not be set up ([`HttpError::Proxy`], [`HttpError::Setup`])
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
