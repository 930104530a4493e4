//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default connection-establishment timeout in milliseconds.
pub const CONNECT_TIMEOUT_MS: u64 = 5_000;

/// Default overall request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Default debug host, pointing at a local mock server.
pub const DEBUG_HOST: &str = "http://localhost:3000";

/// Base URL for the sandbox environment (main and sync-analyze).
pub const SANDBOX_URL: &str = "https://sandbox.riskified.com";

/// Main base URL for the production environment.
pub const PRODUCTION_URL: &str = "https://wh.riskified.com";

/// Sync-analyze base URL for the production environment.
pub const PRODUCTION_SYNC_URL: &str = "https://wh-sync.riskified.com";

/// Default config file name written by `init`.
pub const CONFIG_FILE: &str = "riskified.toml";

/// Default connection timeout as Duration.
#[must_use]
pub const fn connect_timeout() -> Duration {
    Duration::from_millis(CONNECT_TIMEOUT_MS)
}

/// Default request timeout as Duration.
#[must_use]
pub const fn request_timeout() -> Duration {
    Duration::from_millis(REQUEST_TIMEOUT_MS)
}
