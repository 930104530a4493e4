//! Field-level validation errors.

use std::fmt;

use thiserror::Error;

/// What is wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    /// A required field is absent.
    Missing,
    /// A text field is present but empty or whitespace.
    Blank,
    /// A required list is present but empty.
    Empty,
    /// Not a well-formed email address.
    InvalidEmail,
    /// Not a two-letter country code.
    InvalidCountryCode,
    /// Not a three-letter currency code.
    InvalidCurrency,
    /// Not an IPv4 or IPv6 address.
    InvalidIpAddress,
    /// A monetary amount below zero.
    NegativeAmount,
    /// A quantity that is not positive.
    InvalidQuantity,
    /// A card BIN that is not six digits.
    InvalidCardBin,
    /// An AVS/CVV result code that is not a single letter or digit.
    InvalidResultCode,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Missing => "is required",
            Self::Blank => "must not be blank",
            Self::Empty => "must not be empty",
            Self::InvalidEmail => "is not a valid email address",
            Self::InvalidCountryCode => "must be a two-letter country code",
            Self::InvalidCurrency => "must be a three-letter currency code",
            Self::InvalidIpAddress => "is not a valid IP address",
            Self::NegativeAmount => "must not be negative",
            Self::InvalidQuantity => "must be greater than zero",
            Self::InvalidCardBin => "must be six digits",
            Self::InvalidResultCode => "must be a single letter or digit",
        };
        f.write_str(reason)
    }
}

/// One offending field, addressed by its wire path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted/indexed path, e.g. `line_items[0].price`.
    pub field: String,
    /// What is wrong with it.
    pub issue: FieldIssue,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.issue)
    }
}

/// A payload failed validation; raised before any network I/O.
///
/// Carries every offending field so the request can be fixed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid fields: {}", join(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Creates an error from a non-empty list of field errors.
    #[must_use]
    pub const fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// All offending fields, in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Paths of the offending fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Returns the issue reported for `field`, if any.
    #[must_use]
    pub fn issue_for(&self, field: &str) -> Option<FieldIssue> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.issue)
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
