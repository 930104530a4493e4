//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::Environment;
use super::defaults;
use crate::client::Operation;
use crate::validation::ValidationMode;

/// Command-line client for the Riskified fraud-review API
///
/// Sends signed order payloads, signs arbitrary bodies and verifies
/// inbound notifications.
#[derive(Debug, Parser)]
#[command(name = "riskified")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Merchant shop domain
    #[arg(long = "shop-url", global = true)]
    pub shop_url: Option<String>,

    /// Auth key used to sign requests and verify notifications
    #[arg(long = "auth-key", global = true)]
    pub auth_key: Option<String>,

    /// Target environment
    #[arg(long, value_enum, global = true)]
    pub environment: Option<EnvironmentArg>,

    /// Base URL of the mock server for the debug environment
    #[arg(long = "debug-host", global = true)]
    pub debug_host: Option<String>,

    /// Default validation mode
    #[arg(long, value_enum, global = true)]
    pub validation: Option<ValidationArg>,

    /// Connection timeout in milliseconds
    #[arg(long = "connect-timeout", value_name = "MS", global = true)]
    pub connect_timeout: Option<u64>,

    /// Overall request timeout in milliseconds
    #[arg(long = "request-timeout", value_name = "MS", global = true)]
    pub request_timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for riskified
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Send a JSON payload to an API operation and print the reply
    Send {
        /// Operation: checkout, checkout-denied, create, submit, update,
        /// cancel, refund, fulfill, decision, analyze, chargeback, historical
        operation: Operation,

        /// File holding the bare (unwrapped) payload
        payload: PathBuf,

        /// Validation mode for this call only
        #[arg(long, value_enum)]
        mode: Option<ValidationArg>,
    },

    /// Print the signature of a file's bytes
    Sign {
        /// File to sign
        payload: PathBuf,
    },

    /// Verify a notification body and print it
    Verify {
        /// File holding the raw notification body
        body: PathBuf,

        /// Hex signature received with the body
        #[arg(long, short)]
        signature: String,
    },
}

impl Command {
    /// Returns true if the command talks to the API and therefore needs
    /// the full account configuration.
    #[must_use]
    pub const fn needs_shop(&self) -> bool {
        matches!(self, Self::Send { .. })
    }
}

/// Environment argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentArg {
    Sandbox,
    Debug,
    #[value(alias = "prod")]
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Sandbox => Self::Sandbox,
            EnvironmentArg::Debug => Self::Debug,
            EnvironmentArg::Production => Self::Production,
        }
    }
}

/// Validation mode argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValidationArg {
    /// Skip validation
    None,
    /// Check the format of present fields only
    IgnoreMissing,
    /// Also require mandatory fields
    All,
}

impl From<ValidationArg> for ValidationMode {
    fn from(arg: ValidationArg) -> Self {
        match arg {
            ValidationArg::None => Self::None,
            ValidationArg::IgnoreMissing => Self::IgnoreMissing,
            ValidationArg::All => Self::All,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
