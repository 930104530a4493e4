//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use super::cli::Cli;
use super::client::{ClientConfig, ProxyConfig};
use super::defaults;
use super::environment::Environment;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;
use crate::validation::ValidationMode;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The shop URL is only required by commands that call the API; every
/// command needs the auth key.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Client configuration handed to the library
    pub client: ClientConfig,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.client, f)
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values, which take
    /// precedence over built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The auth key is missing, or the shop URL is missing for `send`
    /// - The environment or validation mode name is unknown
    /// - A timeout is zero
    /// - The proxy section is incomplete
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let auth_key = Self::resolve_auth_key(cli, toml)?;
        let shop_url = Self::resolve_shop_url(cli, toml)?;
        let environment = Self::resolve_environment(cli, toml)?;
        let validation = Self::resolve_validation(cli, toml)?;

        let mut client = ClientConfig::new(shop_url, auth_key, environment)
            .with_validation(validation)
            .with_connect_timeout(Self::resolve_timeout(
                "connect_timeout",
                cli.connect_timeout,
                toml.and_then(|t| t.api.connect_timeout_ms),
                defaults::CONNECT_TIMEOUT_MS,
            )?)
            .with_request_timeout(Self::resolve_timeout(
                "request_timeout",
                cli.request_timeout,
                toml.and_then(|t| t.api.request_timeout_ms),
                defaults::REQUEST_TIMEOUT_MS,
            )?);

        if let Some(host) = cli
            .debug_host
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.debug_host.as_deref()))
        {
            client = client.with_debug_host(host);
        }

        if let Some(proxy) = Self::build_proxy(toml)? {
            client = client.with_proxy(proxy);
        }

        if cli.command.needs_shop() {
            client.validate()?;
        } else {
            client.endpoints()?;
        }

        Ok(Self {
            client,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_auth_key(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        cli.auth_key
            .clone()
            .or_else(|| toml.and_then(|t| t.account.auth_key.clone()))
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(
                    field::AUTH_KEY,
                    "Use --auth-key or set account.auth_key in config file",
                )
            })
    }

    fn resolve_shop_url(cli: &Cli, toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let shop_url = cli
            .shop_url
            .clone()
            .or_else(|| toml.and_then(|t| t.account.shop_url.clone()));

        match shop_url {
            Some(url) => Ok(url),
            None if cli.command.needs_shop() => Err(ConfigError::missing(
                field::SHOP_URL,
                "Use --shop-url or set account.shop_url in config file",
            )),
            None => Ok(String::new()),
        }
    }

    fn resolve_environment(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Environment, ConfigError> {
        // CLI takes precedence
        if let Some(environment) = cli.environment {
            return Ok(environment.into());
        }

        toml.and_then(|t| t.api.environment.as_deref())
            .map_or_else(|| Ok(Environment::default()), str::parse)
    }

    fn resolve_validation(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<ValidationMode, ConfigError> {
        if let Some(validation) = cli.validation {
            return Ok(validation.into());
        }

        toml.and_then(|t| t.api.validation.as_deref())
            .map_or_else(|| Ok(ValidationMode::default()), str::parse)
    }

    fn resolve_timeout(
        field: &'static str,
        cli: Option<u64>,
        toml: Option<u64>,
        default: u64,
    ) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let millis = cli.or(toml).unwrap_or(default);

        if millis == 0 {
            return Err(ConfigError::InvalidDuration {
                field,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_millis(millis))
    }

    fn build_proxy(toml: Option<&TomlConfig>) -> Result<Option<ProxyConfig>, ConfigError> {
        let Some(section) = toml.and_then(|t| t.proxy.as_ref()) else {
            return Ok(None);
        };

        let host = section.host.as_deref().ok_or_else(|| {
            ConfigError::missing(field::PROXY_HOST, "Set proxy.host or remove [proxy]")
        })?;
        let port = section.port.ok_or_else(|| {
            ConfigError::missing(field::PROXY_PORT, "Set proxy.port or remove [proxy]")
        })?;

        let proxy = ProxyConfig::new(host, port);
        Ok(Some(match &section.username {
            Some(username) => {
                proxy.with_credentials(username, section.password.clone().unwrap_or_default())
            }
            None => proxy,
        }))
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
