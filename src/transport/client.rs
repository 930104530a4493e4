//! Production HTTP client implementation using reqwest.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Duration;

use secrecy::ExposeSecret as _;

use super::{HttpClient, HttpError, HttpRequest, HttpResponse};
use crate::config::{ClientConfig, ProxyConfig, defaults};

/// Transport settings applied when the reqwest client is built.
#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Maximum time to establish a connection.
    pub connect_timeout: Duration,
    /// Maximum time for the whole request/response exchange.
    pub request_timeout: Duration,
    /// Optional proxy the requests are routed through.
    pub proxy: Option<ProxyConfig>,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            connect_timeout: defaults::connect_timeout(),
            request_timeout: defaults::request_timeout(),
            proxy: None,
        }
    }
}

impl From<&ClientConfig> for TransportSettings {
    fn from(config: &ClientConfig) -> Self {
        Self {
            connect_timeout: config.connect_timeout,
            request_timeout: config.request_timeout,
            proxy: config.proxy.clone(),
        }
    }
}

/// Production HTTP client using reqwest.
///
/// The inner `reqwest::Client` is built on first use and then shared. When
/// a proxy is configured its basic credentials are attached to the proxy
/// up front, so every request carries `Proxy-Authorization` pre-emptively
/// instead of waiting for a 407 challenge. The build runs under a lock, so
/// concurrent first calls wait for a single build and then share it.
///
/// # Example
///
/// ```no_run
/// use riskified::transport::{ReqwestClient, HttpClient, HttpRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::new();
/// let url = Url::parse("https://sandbox.riskified.com/api/create")?;
/// let request = HttpRequest::post(url, b"{}".to_vec());
/// let response = client.request(request).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReqwestClient {
    settings: TransportSettings,
    inner: OnceLock<reqwest::Client>,
    init: Mutex<()>,
    builds: AtomicUsize,
}

impl ReqwestClient {
    /// Creates a new HTTP client with default timeouts and no proxy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(TransportSettings::default())
    }

    /// Creates an HTTP client that will be built from the given settings.
    #[must_use]
    pub const fn with_settings(settings: TransportSettings) -> Self {
        Self {
            settings,
            inner: OnceLock::new(),
            init: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Creates an HTTP client from an existing reqwest client.
    ///
    /// The settings are ignored; the given client is used as-is.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            settings: TransportSettings::default(),
            inner: OnceLock::from(client),
            init: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }

    /// Returns the settings this client was created with.
    #[must_use]
    pub const fn settings(&self) -> &TransportSettings {
        &self.settings
    }

    /// Returns the shared reqwest client, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Proxy`] if the proxy descriptor is unusable, or
    /// [`HttpError::Setup`] if reqwest refuses the configuration.
    pub fn client(&self) -> Result<&reqwest::Client, HttpError> {
        if let Some(client) = self.inner.get() {
            return Ok(client);
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = self.inner.get() {
            return Ok(client);
        }

        let built = build_client(&self.settings)?;
        self.builds.fetch_add(1, Ordering::Relaxed);
        Ok(self.inner.get_or_init(|| built))
    }

    /// Number of times the reqwest client has been built.
    #[cfg(test)]
    pub(crate) fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ReqwestClient {
    fn clone(&self) -> Self {
        let inner = OnceLock::new();
        if let Some(client) = self.inner.get() {
            let _ = inner.set(client.clone());
        }
        Self {
            settings: self.settings.clone(),
            inner,
            init: Mutex::new(()),
            builds: AtomicUsize::new(0),
        }
    }
}

fn build_client(settings: &TransportSettings) -> Result<reqwest::Client, HttpError> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.request_timeout);

    if let Some(proxy) = &settings.proxy {
        builder = builder.proxy(build_proxy(proxy)?);
    }

    builder.build().map_err(|e| HttpError::Setup(Box::new(e)))
}

fn build_proxy(config: &ProxyConfig) -> Result<reqwest::Proxy, HttpError> {
    let url = config
        .url()
        .map_err(|e| HttpError::Proxy(format!("{}:{}: {e}", config.host, config.port)))?;

    let proxy = reqwest::Proxy::all(url.as_str()).map_err(|e| HttpError::Proxy(e.to_string()))?;

    Ok(match &config.username {
        Some(username) => {
            let password = config
                .password
                .as_ref()
                .map_or("", |secret| secret.expose_secret());
            proxy.basic_auth(username, password)
        }
        None => proxy,
    })
}

impl HttpClient for ReqwestClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        let client = self.client()?;

        let response = client
            .post(req.url.as_str())
            .headers(req.headers)
            .body(req.body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_send_error)?.to_vec();

        Ok(HttpResponse::new(status, headers, body))
    }
}

fn map_send_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else if e.is_builder() {
        HttpError::InvalidUrl(e.to_string())
    } else {
        HttpError::Connection(Box::new(e))
    }
}
