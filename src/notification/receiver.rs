//! Signature-checked notification decoding.

use http::HeaderMap;
use thiserror::Error;

use crate::codec::{self, DecodeError};
use crate::models::Notification;
use crate::signature::{SignatureError, SignatureHandler};

/// Header names the signature may arrive under, in lookup order.
///
/// The service sends the underscored form; proxies in front of the
/// receiver often normalize it to dashes.
pub const SIGNATURE_HEADERS: [&str; 2] = ["x-riskified-hmac-sha256", "x_riskified_hmac_sha256"];

/// Error type for inbound notifications.
///
/// After an authentication failure the body must be discarded unread.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The signature is missing or does not match the body.
    #[error("notification signature verification failed")]
    Authentication,

    /// The body is authentic but not a notification.
    #[error("failed to decode notification: {0}")]
    Decode(#[from] DecodeError),
}

/// Verifies and decodes webhook bodies for one account.
#[derive(Debug, Clone)]
pub struct NotificationReceiver {
    signer: SignatureHandler,
}

impl NotificationReceiver {
    /// Creates a receiver keyed by the account's auth key.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError`] if the key is empty.
    pub fn new(auth_key: &str) -> Result<Self, SignatureError> {
        Ok(Self {
            signer: SignatureHandler::new(auth_key)?,
        })
    }

    /// Creates a receiver that shares an existing signer.
    #[must_use]
    pub const fn with_signer(signer: SignatureHandler) -> Self {
        Self { signer }
    }

    /// Authenticates `body` against `signature`, then decodes it.
    ///
    /// # Errors
    ///
    /// Returns [`NotificationError::Authentication`] if the signature does
    /// not match, without looking at the body, or
    /// [`NotificationError::Decode`] if an authentic body is malformed.
    pub fn receive(&self, body: &[u8], signature: &str) -> Result<Notification, NotificationError> {
        if !self.signer.verify(body, signature) {
            tracing::debug!(bytes = body.len(), "Rejected notification with bad signature");
            return Err(NotificationError::Authentication);
        }

        let notification: Notification = codec::decode(body)?;
        tracing::debug!(
            id = ?notification.order.id,
            status = ?notification.order.status,
            "Accepted notification"
        );
        Ok(notification)
    }

    /// Like [`receive`](Self::receive), reading the signature from the
    /// request headers.
    ///
    /// # Errors
    ///
    /// A missing or non-ASCII signature header is an
    /// [`NotificationError::Authentication`] failure.
    pub fn receive_from_headers(
        &self,
        headers: &HeaderMap,
        body: &[u8],
    ) -> Result<Notification, NotificationError> {
        let signature = SIGNATURE_HEADERS
            .iter()
            .find_map(|name| headers.get(*name))
            .and_then(|value| value.to_str().ok())
            .ok_or(NotificationError::Authentication)?;

        self.receive(body, signature)
    }
}
