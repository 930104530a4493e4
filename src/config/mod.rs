//! Configuration layer.
//!
//! This module provides:
//! - The client configuration record ([`ClientConfig`], [`ProxyConfig`])
//! - Environments and their base URLs ([`Environment`], [`Endpoints`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! The library itself only consumes [`ClientConfig`]; the CLI and TOML
//! layers exist for the command-line front end.
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! The proxy is TOML-only: credentials do not belong in shell history.

mod cli;
mod client;
pub mod defaults;
mod environment;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod client_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command, EnvironmentArg, ValidationArg};
pub use client::{ClientConfig, ProxyConfig};
pub use environment::{Endpoints, Environment};
pub use error::{ConfigError, field};
pub use toml::{AccountSection, ApiSection, ProxySection, TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
