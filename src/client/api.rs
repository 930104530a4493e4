//! The API client.

use http::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use http::{HeaderName, HeaderValue};
use secrecy::ExposeSecret as _;
use serde::Serialize;

use super::operation::{Base, Operation};
use super::status;
use crate::codec::{self, Envelope};
use crate::config::{ClientConfig, ConfigError, Endpoints};
use crate::error::Error;
use crate::models::{
    ArrayOrders, CancelOrder, ChargebackOrder, CheckoutDeniedOrder, CheckoutOrder, DecisionOrder,
    FulfillmentOrder, Order, RefundOrder, Response,
};
use crate::signature::SignatureHandler;
use crate::transport::{HttpClient, HttpError, HttpRequest, ReqwestClient, TransportSettings};
use crate::validation::{Validate, ValidationMode};

/// Versioned media type every request accepts.
pub const ACCEPT_VERSION: &str = "application/vnd.riskified.com; version=2";

/// Body content type.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Header carrying the merchant's shop domain.
pub const SHOP_DOMAIN_HEADER: &str = "x_riskified_shop_domain";

/// Header carrying the hex HMAC-SHA256 of the body.
pub const HMAC_HEADER: &str = "x_riskified_hmac_sha256";

const CLIENT_AGENT: &str = concat!("riskified_rust_sdk/", env!("CARGO_PKG_VERSION"));

/// Client for the review service.
///
/// Every operation runs the same pipeline: resolve the validation mode,
/// validate, wrap, encode, sign, send one POST and classify the reply. A
/// payload that fails validation never reaches the network.
///
/// The client holds only immutable state and can be shared across tasks.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use riskified::client::ApiClient;
/// use riskified::config::{ClientConfig, Environment};
/// use riskified::models::Order;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ClientConfig::new("shop.example.com", "auth-key", Environment::Sandbox);
/// let client = ApiClient::new(config)?;
/// let response = client.create_order(&Order::with_id("1001"), None).await?;
/// println!("{:?}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient<H = ReqwestClient> {
    http: H,
    config: ClientConfig,
    endpoints: Endpoints,
    signer: SignatureHandler,
    shop_domain: HeaderValue,
}

impl ApiClient<ReqwestClient> {
    /// Creates a client backed by reqwest, with the timeouts and proxy of
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`ClientConfig::validate`].
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = ReqwestClient::with_settings(TransportSettings::from(&config));
        Self::with_http_client(config, http)
    }
}

impl<H: HttpClient> ApiClient<H> {
    /// Creates a client that sends through `http`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`ClientConfig::validate`].
    pub fn with_http_client(config: ClientConfig, http: H) -> Result<Self, ConfigError> {
        config.validate()?;
        let endpoints = config.endpoints()?;
        let signer = SignatureHandler::new(config.auth_key.expose_secret())?;
        let shop_domain = config.shop_domain_header()?;

        Ok(Self {
            http,
            config,
            endpoints,
            signer,
            shop_domain,
        })
    }

    /// Returns the configuration the client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the base URLs resolved for the configured environment.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Returns the HTTP client requests are sent through.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Sends a checkout for review. No field is mandatory.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn checkout_order(
        &self,
        checkout: &CheckoutOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Checkout, checkout, mode).await
    }

    /// Reports a checkout whose payment authorization was denied.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn checkout_denied_order(
        &self,
        checkout: &CheckoutDeniedOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::CheckoutDenied, checkout, mode).await
    }

    /// Creates an order without submitting it for review.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn create_order(
        &self,
        order: &Order,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Create, order, mode).await
    }

    /// Submits an order for review.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn submit_order(
        &self,
        order: &Order,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Submit, order, mode).await
    }

    /// Updates a previously created order. Partial payloads are accepted.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn update_order(
        &self,
        order: &Order,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Update, order, mode).await
    }

    /// # Errors
    ///
    /// See [`Error`].
    pub async fn cancel_order(
        &self,
        cancel: &CancelOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Cancel, cancel, mode).await
    }

    /// # Errors
    ///
    /// See [`Error`].
    pub async fn refund_order(
        &self,
        refund: &RefundOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Refund, refund, mode).await
    }

    /// # Errors
    ///
    /// See [`Error`].
    pub async fn fulfill_order(
        &self,
        fulfillment: &FulfillmentOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Fulfill, fulfillment, mode).await
    }

    /// Reports the merchant's own decision on an order.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn decision_order(
        &self,
        decision: &DecisionOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Decision, decision, mode).await
    }

    /// Requests a synchronous decision from the sync-analyze endpoint.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn analyze_order(
        &self,
        order: &Order,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Analyze, order, mode).await
    }

    /// # Errors
    ///
    /// See [`Error`].
    pub async fn chargeback_order(
        &self,
        chargeback: &ChargebackOrder,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Chargeback, chargeback, mode).await
    }

    /// Uploads past orders in one batch.
    ///
    /// # Errors
    ///
    /// See [`Error`].
    pub async fn historical_orders(
        &self,
        orders: &ArrayOrders,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error> {
        self.execute(Operation::Historical, orders, mode).await
    }

    async fn execute<T>(
        &self,
        operation: Operation,
        payload: &T,
        mode: Option<ValidationMode>,
    ) -> Result<Response, Error>
    where
        T: Validate + Serialize,
    {
        let route = operation.route();
        let mode = operation.effective_mode(self.config.validation, mode);
        tracing::trace!(%operation, %mode, "Resolved validation mode");

        payload.validate(mode)?;

        let body = match route.envelope {
            Some(key) => codec::encode(&Envelope::new(key, payload))?,
            None => codec::encode(payload)?,
        };
        let request = self.build_request(operation, body)?;

        tracing::debug!(
            %operation,
            url = %request.url,
            bytes = request.body_bytes().len(),
            "Sending request"
        );
        let response = self.http.request(request).await?;
        tracing::debug!(%operation, status = %response.status, "Received response");

        status::classify(&response)?;
        Ok(codec::decode_response(&response.body, route.response)?)
    }

    /// Builds the signed POST for an encoded body.
    fn build_request(&self, operation: Operation, body: Vec<u8>) -> Result<HttpRequest, Error> {
        let route = operation.route();
        let base = match route.base {
            Base::Api => &self.endpoints.api,
            Base::SyncAnalyze => &self.endpoints.sync_analyze,
        };
        let url = base.join(route.path).map_err(|e| ConfigError::InvalidUrl {
            url: format!("{base}{}", route.path),
            reason: e.to_string(),
        })?;

        let signature = HeaderValue::from_str(&self.signer.sign(&body))
            .map_err(|e| HttpError::Setup(Box::new(e)))?;

        Ok(HttpRequest::post(url, body)
            .with_header(ACCEPT, HeaderValue::from_static(ACCEPT_VERSION))
            .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .with_header(USER_AGENT, HeaderValue::from_static(CLIENT_AGENT))
            .with_header(
                HeaderName::from_static(SHOP_DOMAIN_HEADER),
                self.shop_domain.clone(),
            )
            .with_header(HeaderName::from_static(HMAC_HEADER), signature))
    }
}
