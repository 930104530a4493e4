//! Codec errors.

use thiserror::Error;

/// A payload could not be serialized.
#[derive(Debug, Error)]
#[error("failed to encode payload: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);

/// A body could not be decoded into the expected shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Valid JSON that does not fit the target type.
    #[error("unexpected body shape: {0}")]
    Shape(#[source] serde_json::Error),

    /// The body lacks the expected envelope key.
    #[error("missing \"{key}\" envelope")]
    MissingEnvelope {
        /// The envelope key that was expected
        key: &'static str,
    },
}

impl DecodeError {
    /// Splits a `serde_json` failure into syntax and shape problems.
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        if err.is_data() {
            Self::Shape(err)
        } else {
            Self::Malformed(err)
        }
    }
}
