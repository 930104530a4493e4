//! Application execution logic.
//!
//! This module runs one subcommand against the validated configuration and
//! returns the text to print on stdout.

use std::path::{Path, PathBuf};

use secrecy::ExposeSecret as _;
use serde::Serialize;
use thiserror::Error;

use riskified::client::{ApiClient, Operation};
use riskified::codec::{self, DecodeError};
use riskified::config::{Command, ConfigError, ValidatedConfig, write_default_config};
use riskified::models::Response;
use riskified::notification::{NotificationError, NotificationReceiver};
use riskified::signature::{self, SignatureError};
use riskified::transport::HttpClient;
use riskified::{Error, ValidationMode};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read an input file.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload file does not hold the operation's payload type.
    #[error("Invalid {operation} payload: {source}")]
    Payload {
        operation: Operation,
        #[source]
        source: DecodeError,
    },

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// The notification was rejected.
    #[error(transparent)]
    Notification(#[from] NotificationError),

    /// Failed to render the result as JSON.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Executes a subcommand and returns its output.
///
/// # Errors
///
/// Returns an error if:
/// - An input file cannot be read or decoded
/// - The API call fails
/// - A notification signature does not verify
pub async fn execute(command: Command, config: &ValidatedConfig) -> Result<String, RunError> {
    match command {
        Command::Init { output } => {
            write_default_config(&output)?;
            Ok(format!(
                "Configuration template written to: {}",
                output.display()
            ))
        }
        Command::Send {
            operation,
            payload,
            mode,
        } => {
            let body = read_file(&payload)?;
            let client = ApiClient::new(config.client.clone())?;
            let response = send(&client, operation, &body, mode.map(Into::into)).await?;
            render(&response)
        }
        Command::Sign { payload } => {
            let body = read_file(&payload)?;
            Ok(signature::sign(
                config.client.auth_key.expose_secret(),
                &body,
            )?)
        }
        Command::Verify { body, signature } => {
            let bytes = read_file(&body)?;
            verify(config, &bytes, &signature)
        }
    }
}

/// Decodes a bare payload for `operation` and sends it.
async fn send<H: HttpClient>(
    client: &ApiClient<H>,
    operation: Operation,
    body: &[u8],
    mode: Option<ValidationMode>,
) -> Result<Response, RunError> {
    let invalid = |source| RunError::Payload { operation, source };
    tracing::debug!(%operation, bytes = body.len(), "Decoding payload");

    let response = match operation {
        Operation::Checkout => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.checkout_order(&payload, mode).await
        }
        Operation::CheckoutDenied => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.checkout_denied_order(&payload, mode).await
        }
        Operation::Create => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.create_order(&payload, mode).await
        }
        Operation::Submit => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.submit_order(&payload, mode).await
        }
        Operation::Update => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.update_order(&payload, mode).await
        }
        Operation::Cancel => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.cancel_order(&payload, mode).await
        }
        Operation::Refund => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.refund_order(&payload, mode).await
        }
        Operation::Fulfill => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.fulfill_order(&payload, mode).await
        }
        Operation::Decision => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.decision_order(&payload, mode).await
        }
        Operation::Analyze => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.analyze_order(&payload, mode).await
        }
        Operation::Chargeback => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.chargeback_order(&payload, mode).await
        }
        Operation::Historical => {
            let payload = codec::decode(body).map_err(invalid)?;
            client.historical_orders(&payload, mode).await
        }
    };

    Ok(response?)
}

/// Authenticates a notification body and renders it.
fn verify(config: &ValidatedConfig, body: &[u8], signature: &str) -> Result<String, RunError> {
    let receiver = NotificationReceiver::new(config.client.auth_key.expose_secret())?;
    let notification = receiver.receive(body, signature)?;
    render(&notification)
}

fn read_file(path: &Path) -> Result<Vec<u8>, RunError> {
    std::fs::read(path).map_err(|source| RunError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn render<T: Serialize>(value: &T) -> Result<String, RunError> {
    Ok(serde_json::to_string_pretty(value)?)
}
