//! HTTP status classification.

use http::StatusCode;

use crate::codec;
use crate::error::HttpResponseError;
use crate::models::Response;
use crate::transport::HttpResponse;

/// Message reported for 504, the only retryable status.
pub const TEMPORARY_ERROR: &str = "temporary error, retry";

/// Message reported for any status outside the documented set.
pub const CONTACT_SUPPORT: &str = "contact support";

/// Maps a non-success reply to the error the caller sees.
///
/// Returns `Ok` only for 200.
///
/// # Errors
///
/// - 400, 401, 404: the status with the server's error message.
/// - 504: [`TEMPORARY_ERROR`].
/// - Anything else: status 500 with [`CONTACT_SUPPORT`].
pub fn classify(response: &HttpResponse) -> Result<(), HttpResponseError> {
    match response.status {
        StatusCode::OK => Ok(()),
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::NOT_FOUND => Err(
            HttpResponseError::new(response.status.as_u16(), rejection_message(response)),
        ),
        StatusCode::GATEWAY_TIMEOUT => Err(HttpResponseError::new(
            StatusCode::GATEWAY_TIMEOUT.as_u16(),
            TEMPORARY_ERROR,
        )),
        _ => Err(HttpResponseError::new(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            CONTACT_SUPPORT,
        )),
    }
}

/// Picks the most specific message a rejection carries: the decoded
/// `error.message`, then the raw body text, then the reason phrase.
fn rejection_message(response: &HttpResponse) -> String {
    if let Ok(body) = codec::decode::<Response>(&response.body) {
        if let Some(message) = body.error.and_then(|e| e.message) {
            return message;
        }
    }

    if let Some(text) = response.body_text().map(str::trim) {
        if !text.is_empty() {
            return text.to_string();
        }
    }

    response
        .status
        .canonical_reason()
        .unwrap_or("request rejected")
        .to_string()
}
