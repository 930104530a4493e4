//! Wire envelope wrapping a payload under a fixed key.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Top-level key the service expects a payload under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKey {
    /// `{"order": {...}}`
    Order,
    /// `{"checkout": {...}}`
    Checkout,
}

impl EnvelopeKey {
    /// Returns the wire name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Checkout => "checkout",
        }
    }
}

impl fmt::Display for EnvelopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A borrowed payload wrapped under an [`EnvelopeKey`].
///
/// One generic wrapper serves every payload type; it serializes as a
/// single-entry object and borrows rather than clones the payload.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a, T: ?Sized> {
    key: EnvelopeKey,
    payload: &'a T,
}

impl<'a, T: ?Sized> Envelope<'a, T> {
    #[must_use]
    pub const fn new(key: EnvelopeKey, payload: &'a T) -> Self {
        Self { key, payload }
    }

    #[must_use]
    pub const fn key(&self) -> EnvelopeKey {
        self.key
    }

    #[must_use]
    pub const fn payload(&self) -> &'a T {
        self.payload
    }
}

impl<T: Serialize + ?Sized> Serialize for Envelope<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key.as_str(), self.payload)?;
        map.end()
    }
}
