//! Configuration errors.

use std::path::PathBuf;

use thiserror::Error;

/// Why a [`ClientConfig`](super::ClientConfig) could not be built or used.
///
/// Returned both by the library (client construction) and by the CLI
/// layers that assemble a configuration from arguments and a TOML file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// `init` could not write the template.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A mandatory value was not supplied anywhere.
    #[error("Missing required field: {field}. {hint}")]
    MissingRequired {
        /// Name of the missing field
        field: &'static str,
        /// Hint for how to provide the value
        hint: &'static str,
    },

    /// Invalid URL provided.
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The invalid URL string
        url: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The shop URL cannot be sent as an HTTP header value.
    #[error("Invalid shop URL '{value}': {reason}")]
    InvalidShopUrl {
        /// The rejected shop URL
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid duration value (zero or too large).
    #[error("Invalid duration for {field}: {reason}")]
    InvalidDuration {
        /// Name of the field
        field: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Invalid environment name.
    #[error("Invalid environment '{value}': expected sandbox, debug, or production")]
    InvalidEnvironment {
        /// The invalid value provided
        value: String,
    },

    /// Invalid validation mode name.
    #[error("Invalid validation mode '{value}': expected none, ignore_missing, or all")]
    InvalidValidationMode {
        /// The invalid value provided
        value: String,
    },

    /// Proxy host/port do not form a usable proxy URL.
    #[error("Invalid proxy '{host}': {reason}")]
    InvalidProxy {
        /// The proxy host
        host: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The auth key could not key the signature.
    #[error("Invalid auth key: {0}")]
    InvalidAuthKey(#[from] crate::signature::SignatureError),
}

/// Field names reported by [`ConfigError::MissingRequired`].
pub mod field {
    /// The shop URL field.
    pub const SHOP_URL: &str = "shop_url";
    /// The auth key field.
    pub const AUTH_KEY: &str = "auth_key";
    /// The proxy host field.
    pub const PROXY_HOST: &str = "proxy.host";
    /// The proxy port field.
    pub const PROXY_PORT: &str = "proxy.port";
}

impl ConfigError {
    /// Creates a `MissingRequired` error for a required field.
    #[must_use]
    pub const fn missing(field: &'static str, hint: &'static str) -> Self {
        Self::MissingRequired { field, hint }
    }
}
