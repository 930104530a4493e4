//! HMAC-SHA256 request signing and verification.
//!
//! Both directions share one secret, the account auth key. Outbound
//! requests carry the hex digest of the exact body bytes; inbound
//! notifications are accepted only if the same digest recomputes.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// The auth key cannot be used as a signing secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The key is empty.
    #[error("auth key must not be empty")]
    EmptyKey,

    /// The MAC rejected the key.
    #[error("auth key rejected: {0}")]
    InvalidKey(String),
}

/// Signs and verifies payload bytes with a fixed secret.
///
/// The keyed MAC state is computed once and cloned per call, so a handler
/// can be shared freely between tasks.
#[derive(Clone)]
pub struct SignatureHandler {
    mac: HmacSha256,
}

impl SignatureHandler {
    /// Creates a handler keyed by the UTF-8 bytes of `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::EmptyKey`] if `secret` is empty.
    pub fn new(secret: &str) -> Result<Self, SignatureError> {
        if secret.is_empty() {
            return Err(SignatureError::EmptyKey);
        }
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
        Ok(Self { mac })
    }

    /// Returns the lowercase hex HMAC-SHA256 digest of `bytes`.
    #[must_use]
    pub fn sign(&self, bytes: &[u8]) -> String {
        let mut mac = self.mac.clone();
        mac.update(bytes);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Checks `digest` against the digest of `bytes` in constant time.
    ///
    /// Hex of either case is accepted. A digest that is not hex, or has the
    /// wrong length, is rejected.
    #[must_use]
    pub fn verify(&self, bytes: &[u8], digest: &str) -> bool {
        let Ok(expected) = hex::decode(digest.trim()) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(bytes);
        mac.verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for SignatureHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureHandler")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// One-shot [`SignatureHandler::sign`].
///
/// # Errors
///
/// Returns [`SignatureError`] if `secret` cannot key the MAC.
pub fn sign(secret: &str, bytes: &[u8]) -> Result<String, SignatureError> {
    Ok(SignatureHandler::new(secret)?.sign(bytes))
}

/// One-shot [`SignatureHandler::verify`]. An unusable secret verifies
/// nothing.
#[must_use]
pub fn verify(secret: &str, bytes: &[u8], digest: &str) -> bool {
    SignatureHandler::new(secret).is_ok_and(|handler| handler.verify(bytes, digest))
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
