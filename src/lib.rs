//! Riskified: fraud-review API client
//!
//! A library for submitting signed order payloads to the Riskified review
//! service and for authenticating the decision notifications it posts
//! back.

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod notification;
pub mod signature;
pub mod transport;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use client::ApiClient;
pub use config::{ClientConfig, Environment};
pub use error::{Error, IsRetryable};
pub use notification::NotificationReceiver;
pub use validation::ValidationMode;
