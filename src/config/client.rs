//! Client configuration record.
//!
//! [`ClientConfig`] is the single configuration surface of the API client.
//! It is supplied explicitly by the caller; nothing in the library reads
//! files or environment variables to build one.

use std::fmt;
use std::net::Ipv6Addr;
use std::time::Duration;

use http::HeaderValue;
use secrecy::{ExposeSecret as _, SecretString};
use url::Url;

use super::defaults;
use super::environment::{Endpoints, Environment};
use super::error::{ConfigError, field};
use crate::validation::ValidationMode;

/// Proxy the API requests are routed through.
///
/// When a username is set, basic credentials are sent pre-emptively.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Proxy host name or address (no scheme).
    pub host: String,
    /// Proxy port.
    pub port: u16,
    /// Username for basic proxy authentication.
    pub username: Option<String>,
    /// Password for basic proxy authentication.
    pub password: Option<SecretString>,
}

impl ProxyConfig {
    /// Creates an unauthenticated proxy descriptor.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            username: None,
            password: None,
        }
    }

    /// Sets basic-auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(SecretString::from(password.into()));
        self
    }

    /// Returns the proxy URL (`http://host:port`). IPv6 literal hosts are
    /// bracketed.
    ///
    /// # Errors
    ///
    /// Returns the parse error if the host is not a valid URL host.
    pub fn url(&self) -> Result<Url, url::ParseError> {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            Url::parse(&format!("http://[{}]:{}", self.host, self.port))
        } else {
            Url::parse(&format!("http://{}:{}", self.host, self.port))
        }
    }
}

/// Immutable configuration of one API client.
///
/// Construct with [`ClientConfig::new`] and adjust with the `with_*`
/// methods. The auth key doubles as the signing secret and is never
/// printed by `Debug` or `Display`.
///
/// # Example
///
/// ```
/// use riskified::config::{ClientConfig, Environment};
/// use riskified::validation::ValidationMode;
///
/// let config = ClientConfig::new("shop.example.com", "auth-key", Environment::Sandbox)
///     .with_validation(ValidationMode::IgnoreMissing);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Merchant storefront domain, sent as the shop-domain header.
    pub shop_url: String,
    /// Shared secret keying the request signature.
    pub auth_key: SecretString,
    /// Target environment.
    pub environment: Environment,
    /// Base URL of the mock server used by [`Environment::Debug`].
    pub debug_host: Option<String>,
    /// Validation mode applied when a call does not override it.
    pub validation: ValidationMode,
    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum time for the whole request/response exchange.
    pub request_timeout: Duration,
    /// Optional proxy.
    pub proxy: Option<ProxyConfig>,
}

impl ClientConfig {
    /// Creates a configuration with default validation (`All`), default
    /// timeouts and no proxy.
    #[must_use]
    pub fn new(
        shop_url: impl Into<String>,
        auth_key: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            shop_url: shop_url.into(),
            auth_key: SecretString::from(auth_key.into()),
            environment,
            debug_host: None,
            validation: ValidationMode::default(),
            connect_timeout: defaults::connect_timeout(),
            request_timeout: defaults::request_timeout(),
            proxy: None,
        }
    }

    /// Sets the default validation mode.
    #[must_use]
    pub const fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Sets the debug host used by [`Environment::Debug`].
    #[must_use]
    pub fn with_debug_host(mut self, host: impl Into<String>) -> Self {
        self.debug_host = Some(host.into());
        self
    }

    /// Sets the connection timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Routes requests through a proxy.
    #[must_use]
    pub fn with_proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Resolves the base URLs for the configured environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the debug host is invalid.
    pub fn endpoints(&self) -> Result<Endpoints, ConfigError> {
        Endpoints::resolve(self.environment, self.debug_host.as_deref())
    }

    /// Returns the shop URL as a header value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopUrl`] if the value cannot be sent
    /// as an HTTP header.
    pub fn shop_domain_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.shop_url).map_err(|e| ConfigError::InvalidShopUrl {
            value: self.shop_url.clone(),
            reason: e.to_string(),
        })
    }

    /// Checks every field an API client depends on.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The shop URL or auth key is empty
    /// - The shop URL cannot be sent as a header
    /// - A timeout is zero
    /// - The debug host or proxy host is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shop_url.trim().is_empty() {
            return Err(ConfigError::missing(
                field::SHOP_URL,
                "Use --shop-url or set account.shop_url in config file",
            ));
        }
        if self.auth_key.expose_secret().is_empty() {
            return Err(ConfigError::missing(
                field::AUTH_KEY,
                "Use --auth-key or set account.auth_key in config file",
            ));
        }

        self.shop_domain_header()?;
        ensure_non_zero("connect_timeout", self.connect_timeout)?;
        ensure_non_zero("request_timeout", self.request_timeout)?;
        self.endpoints()?;

        if let Some(proxy) = &self.proxy {
            proxy.url().map_err(|e| ConfigError::InvalidProxy {
                host: proxy.host.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(())
    }
}

fn ensure_non_zero(field: &'static str, value: Duration) -> Result<(), ConfigError> {
    if value.is_zero() {
        return Err(ConfigError::InvalidDuration {
            field,
            reason: "must be greater than 0".to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let proxy = self
            .proxy
            .as_ref()
            .map_or_else(|| "none".to_string(), |p| format!("{}:{}", p.host, p.port));

        write!(
            f,
            "Config {{ shop_url: {}, environment: {}, validation: {}, connect_timeout: {}ms, \
             request_timeout: {}ms, proxy: {} }}",
            self.shop_url,
            self.environment,
            self.validation,
            self.connect_timeout.as_millis(),
            self.request_timeout.as_millis(),
            proxy,
        )
    }
}
