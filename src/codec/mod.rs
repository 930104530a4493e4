//! Canonical JSON encoding and decoding.
//!
//! The signature is computed over the bytes [`encode`] returns, so the
//! encoding must be stable: struct fields in declaration order, unset
//! optional fields omitted, no whitespace.

mod envelope;
mod error;

#[cfg(test)]
mod codec_tests;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use envelope::{Envelope, EnvelopeKey};
pub use error::{DecodeError, EncodeError};

use crate::models::Response;

/// Which envelope a reply body carries its order under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `{"order": {...}}`
    Order,
    /// `{"checkout": {...}}`, aliased onto `order` when decoded.
    Checkout,
}

/// Serializes `value` to compact JSON bytes.
///
/// # Errors
///
/// Returns [`EncodeError`] if serialization fails.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(value)?)
}

/// Decodes `bytes` into `T`.
///
/// # Errors
///
/// Returns [`DecodeError::Malformed`] for invalid JSON and
/// [`DecodeError::Shape`] when the JSON does not fit `T`.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(bytes).map_err(DecodeError::from_json)
}

/// Decodes the payload found under `key` in an enveloped body.
///
/// # Errors
///
/// Returns [`DecodeError::MissingEnvelope`] if the body is not an object
/// holding `key`, otherwise as [`decode`].
pub fn decode_enveloped<T: DeserializeOwned>(
    bytes: &[u8],
    key: EnvelopeKey,
) -> Result<T, DecodeError> {
    let mut body: Value = decode(bytes)?;
    let payload = body
        .as_object_mut()
        .and_then(|object| object.remove(key.as_str()))
        .ok_or(DecodeError::MissingEnvelope { key: key.as_str() })?;
    serde_json::from_value(payload).map_err(DecodeError::Shape)
}

/// Decodes a service reply.
///
/// Checkout endpoints answer with `checkout` where every other endpoint
/// answers with `order`; for [`ResponseShape::Checkout`] the former is
/// moved onto the latter so callers always read [`Response::order`].
///
/// # Errors
///
/// Returns [`DecodeError`] if the body is not a JSON object of the
/// response shape.
pub fn decode_response(bytes: &[u8], shape: ResponseShape) -> Result<Response, DecodeError> {
    let mut body: Value = decode(bytes)?;
    if shape == ResponseShape::Checkout {
        if let Some(object) = body.as_object_mut() {
            let order_key = EnvelopeKey::Order.as_str();
            if !object.contains_key(order_key) {
                if let Some(checkout) = object.remove(EnvelopeKey::Checkout.as_str()) {
                    object.insert(order_key.to_string(), checkout);
                }
            }
        }
    }
    serde_json::from_value(body).map_err(DecodeError::Shape)
}
