//! Inbound webhook verification.
//!
//! The web-serving layer hands the raw body and the signature header to a
//! [`NotificationReceiver`]. The body is only decoded after its signature
//! verifies, so a [`Notification`](crate::models::Notification) in hand has
//! always been authenticated.

mod receiver;

#[cfg(test)]
mod receiver_tests;

pub use receiver::{NotificationError, NotificationReceiver, SIGNATURE_HEADERS};
