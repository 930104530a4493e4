//! Shared test fixtures.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_decimal::Decimal;

use crate::models::{Address, Customer, LineItem, Order, PaymentDetails};
use crate::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};

pub const SECRET: &str = "ab1234567890cdef";

/// An order that passes validation under every mode.
pub fn sample_order() -> Order {
    Order {
        email: Some("great.customer@example.com".to_string()),
        currency: Some("USD".to_string()),
        total_price: Some(Decimal::new(11_300, 2)),
        browser_ip: Some("124.185.86.55".to_string()),
        customer: Some(Customer {
            email: Some("great.customer@example.com".to_string()),
            first_name: Some("Bob".to_string()),
            last_name: Some("Norman".to_string()),
            ..Customer::default()
        }),
        billing_address: Some(sample_address()),
        shipping_address: Some(sample_address()),
        payment_details: Some(PaymentDetails {
            credit_card_bin: Some("370002".to_string()),
            credit_card_company: Some("Visa".to_string()),
            avs_result_code: Some("Y".to_string()),
            cvv_result_code: Some("M".to_string()),
            ..PaymentDetails::default()
        }),
        line_items: Some(vec![LineItem {
            title: Some("Keyboard".to_string()),
            price: Some(Decimal::new(11_300, 2)),
            quantity: Some(1),
            sku: Some("KB-01".to_string()),
            ..LineItem::default()
        }]),
        ..Order::with_id("ORD-1001")
    }
}

pub fn sample_address() -> Address {
    Address {
        first_name: Some("Bob".to_string()),
        last_name: Some("Norman".to_string()),
        address1: Some("Chestnut Street 92".to_string()),
        city: Some("Louisville".to_string()),
        country_code: Some("US".to_string()),
        zip: Some("40202".to_string()),
        ..Address::default()
    }
}

/// Mock HTTP client that replays one canned outcome and records requests.
#[derive(Debug)]
pub struct MockHttpClient {
    outcome: Mutex<Option<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    calls: AtomicUsize,
}

impl MockHttpClient {
    pub fn new(outcome: Result<HttpResponse, HttpError>) -> Self {
        Self {
            outcome: Mutex::new(Some(outcome)),
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn responding(status: u16, body: &str) -> Self {
        let status = http::StatusCode::from_u16(status).unwrap();
        Self::new(Ok(HttpResponse::new(
            status,
            http::HeaderMap::new(),
            body.as_bytes().to_vec(),
        )))
    }

    pub fn failing(error: HttpError) -> Self {
        Self::new(Err(error))
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl HttpClient for MockHttpClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.outcome
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Err(HttpError::Timeout))
    }
}
