//! Format rules for individual field values.
//!
//! Every rule has the shape `fn(&T) -> Result<(), FieldIssue>` so it can be
//! handed to [`Validator::required`](super::Validator::required) and
//! [`Validator::optional`](super::Validator::optional).

use std::net::IpAddr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::FieldIssue;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-']+@[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Accepts any value; used for fields whose type already guarantees form.
#[allow(clippy::unnecessary_wraps)]
pub const fn any<T: ?Sized>(_: &T) -> Result<(), FieldIssue> {
    Ok(())
}

/// Text must contain something other than whitespace.
pub fn text(value: &str) -> Result<(), FieldIssue> {
    if value.trim().is_empty() {
        Err(FieldIssue::Blank)
    } else {
        Ok(())
    }
}

/// Basic `local@domain.tld` address grammar.
pub fn email(value: &str) -> Result<(), FieldIssue> {
    text(value)?;
    if EMAIL.is_match(value.trim()) {
        Ok(())
    } else {
        Err(FieldIssue::InvalidEmail)
    }
}

/// ISO 3166-1 alpha-2 shape: exactly two ASCII letters.
pub fn country_code(value: &str) -> Result<(), FieldIssue> {
    if value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(FieldIssue::InvalidCountryCode)
    }
}

/// ISO 4217 shape: exactly three ASCII letters.
pub fn currency(value: &str) -> Result<(), FieldIssue> {
    if value.len() == 3 && value.bytes().all(|b| b.is_ascii_alphabetic()) {
        Ok(())
    } else {
        Err(FieldIssue::InvalidCurrency)
    }
}

/// IPv4 or IPv6 literal.
pub fn ip_address(value: &str) -> Result<(), FieldIssue> {
    value
        .trim()
        .parse::<IpAddr>()
        .map(|_| ())
        .map_err(|_| FieldIssue::InvalidIpAddress)
}

/// Monetary amounts may be zero but never negative.
pub fn amount(value: &Decimal) -> Result<(), FieldIssue> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(FieldIssue::NegativeAmount)
    } else {
        Ok(())
    }
}

/// Quantities must be at least one.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub const fn quantity(value: &u32) -> Result<(), FieldIssue> {
    if *value == 0 {
        Err(FieldIssue::InvalidQuantity)
    } else {
        Ok(())
    }
}

/// First six digits of a card number.
pub fn card_bin(value: &str) -> Result<(), FieldIssue> {
    if value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldIssue::InvalidCardBin)
    }
}

/// Single-character AVS/CVV gateway result code.
pub fn result_code(value: &str) -> Result<(), FieldIssue> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphanumeric() => Ok(()),
        _ => Err(FieldIssue::InvalidResultCode),
    }
}
