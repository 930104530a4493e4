//! Service environments and their base URLs.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use url::Url;

use super::ConfigError;
use super::defaults;

/// Which service deployment requests are sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Shared test deployment.
    #[default]
    Sandbox,
    /// A developer's own mock server, located by the debug host setting.
    Debug,
    /// Live deployment.
    Production,
}

/// The pair of base URLs an environment resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Base URL for every operation except sync-analyze.
    pub api: Url,
    /// Base URL for the synchronous analyze operation.
    pub sync_analyze: Url,
}

impl Endpoints {
    /// Resolves the endpoints for an environment.
    ///
    /// `debug_host` is only consulted for [`Environment::Debug`]; when it is
    /// `None` the local default is used.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the debug host is not a valid
    /// absolute URL.
    pub fn resolve(environment: Environment, debug_host: Option<&str>) -> Result<Self, ConfigError> {
        let (api, sync_analyze) = match environment {
            Environment::Sandbox => (defaults::SANDBOX_URL, defaults::SANDBOX_URL),
            Environment::Production => (defaults::PRODUCTION_URL, defaults::PRODUCTION_SYNC_URL),
            Environment::Debug => {
                let host = debug_host.unwrap_or(defaults::DEBUG_HOST);
                (host, host)
            }
        };

        Ok(Self {
            api: parse_base(api)?,
            sync_analyze: parse_base(sync_analyze)?,
        })
    }
}

/// Parses a base URL and makes sure its path ends with `/` so that relative
/// joins keep any path prefix of a debug host.
fn parse_base(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: "not usable as a base URL".to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sandbox => "sandbox",
            Self::Debug => "debug",
            Self::Production => "production",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "debug" => Ok(Self::Debug),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidEnvironment {
                value: s.to_string(),
            }),
        }
    }
}
