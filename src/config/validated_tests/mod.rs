//! Tests for merging CLI arguments and TOML into a client configuration.

use super::ConfigError;
use super::cli::Cli;
use super::toml::TomlConfig;
use super::validated::ValidatedConfig;

/// Parses `riskified <args>`.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["riskified"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}
