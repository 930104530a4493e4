//! Payload validation.
//!
//! Every outbound payload implements [`Validate`]. A [`ValidationMode`]
//! decides how strict the walk is:
//!
//! - [`ValidationMode::None`] skips validation entirely.
//! - [`ValidationMode::IgnoreMissing`] checks the format of present fields.
//! - [`ValidationMode::All`] additionally requires every field marked
//!   required for the payload.
//!
//! Failures are aggregated into a single [`ValidationError`] naming every
//! offending field.

mod error;
mod mode;
pub mod rules;
mod validator;


pub use error::{FieldError, FieldIssue, ValidationError};
pub use mode::ValidationMode;
pub use validator::{Validate, Validator};
