//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Account credentials
    #[serde(default)]
    pub account: AccountSection,

    /// Endpoint and request settings
    #[serde(default)]
    pub api: ApiSection,

    /// Optional outbound proxy
    pub proxy: Option<ProxySection>,
}

/// Account section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSection {
    /// Merchant shop domain
    pub shop_url: Option<String>,

    /// Shared secret used to sign requests
    pub auth_key: Option<String>,
}

/// API section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// "sandbox", "debug" or "production"
    pub environment: Option<String>,

    /// Base URL of the mock server for the debug environment
    pub debug_host: Option<String>,

    /// "none", "ignore_missing" or "all"
    pub validation: Option<String>,

    /// Connection timeout in milliseconds
    pub connect_timeout_ms: Option<u64>,

    /// Overall request timeout in milliseconds
    pub request_timeout_ms: Option<u64>,
}

/// Proxy section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProxySection {
    /// Proxy host name or address
    pub host: Option<String>,

    /// Proxy port
    pub port: Option<u16>,

    /// Username for basic proxy authentication
    pub username: Option<String>,

    /// Password for basic proxy authentication
    pub password: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Riskified client configuration

[account]
# Merchant shop domain (required for `send`)
# shop_url = "shop.example.com"

# Auth key from the merchant dashboard (required)
# auth_key = "your-auth-key"

[api]
# Target environment: "sandbox", "debug" or "production" (default: sandbox)
environment = "sandbox"

# Mock server used by the debug environment (default: http://localhost:3000)
# debug_host = "http://localhost:3000"

# Validation mode: "none", "ignore_missing" or "all" (default: all)
# Checkout and update always behave as "ignore_missing" unless set to "none".
validation = "all"

# Timeouts in milliseconds
connect_timeout_ms = 5000
request_timeout_ms = 10000

# Outbound proxy with optional basic authentication
# [proxy]
# host = "proxy.internal"
# port = 3128
# username = "user"
# password = "secret"
"#
    .to_string()
}
