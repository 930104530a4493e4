//! Orders, checkouts and the historical batch.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{
    Address, ClientDetails, Customer, DiscountCode, LineItem, OrderId, PaymentDetails,
    ShippingLine,
};
use crate::validation::{Validate, Validator, rules};

/// A full order as submitted for review.
///
/// Under [`ValidationMode::All`](crate::validation::ValidationMode::All)
/// the order must carry an id, email, currency, total price and at least
/// one line item. Nested records are checked whenever they are present.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: Option<OrderId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub gateway: Option<String>,
    pub browser_ip: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total_price: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub total_discounts: Option<Decimal>,
    pub cart_token: Option<String>,
    pub note: Option<String>,
    pub referring_site: Option<String>,
    pub source: Option<String>,
    pub vendor_id: Option<String>,
    pub vendor_name: Option<String>,
    pub customer: Option<Customer>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub payment_details: Option<PaymentDetails>,
    pub client_details: Option<ClientDetails>,
    pub line_items: Option<Vec<LineItem>>,
    pub shipping_lines: Option<Vec<ShippingLine>>,
    pub discount_codes: Option<Vec<DiscountCode>>,
}

impl Order {
    /// Creates an order with only its id set.
    #[must_use]
    pub fn with_id(id: impl Into<OrderId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }
}

impl Validate for Order {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("id", self.id.as_ref(), OrderId::check);
        v.required("email", self.email.as_deref(), rules::email);
        v.required("currency", self.currency.as_deref(), rules::currency);
        v.required("total_price", self.total_price.as_ref(), rules::amount);
        v.required_list("line_items", self.line_items.as_deref());

        v.optional("browser_ip", self.browser_ip.as_deref(), rules::ip_address);
        v.optional("total_discounts", self.total_discounts.as_ref(), rules::amount);
        v.optional_nested("customer", self.customer.as_ref());
        v.optional_nested("billing_address", self.billing_address.as_ref());
        v.optional_nested("shipping_address", self.shipping_address.as_ref());
        v.optional_nested("payment_details", self.payment_details.as_ref());
        v.optional_list("shipping_lines", self.shipping_lines.as_deref());
        v.optional_list("discount_codes", self.discount_codes.as_deref());
    }
}

/// An order still in checkout.
///
/// Partial submission is legitimate during checkout, so every field is
/// optional whatever mode is in force; present fields are still checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutOrder(pub Order);

impl From<Order> for CheckoutOrder {
    fn from(order: Order) -> Self {
        Self(order)
    }
}

impl Validate for CheckoutOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.relaxed(|v| self.0.validate_fields(v));
    }
}

/// Gateway rejection reported for a denied checkout.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationError {
    pub created_at: Option<DateTime<Utc>>,
    pub error_code: Option<String>,
    pub message: Option<String>,
}

impl Validate for AuthorizationError {
    fn validate_fields(&self, v: &mut Validator) {
        v.optional("error_code", self.error_code.as_deref(), rules::text);
    }
}

/// A checkout whose payment authorization was denied.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutDeniedOrder {
    pub id: Option<OrderId>,
    pub authorization_error: Option<AuthorizationError>,
}

impl Validate for CheckoutDeniedOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.relaxed(|v| {
            v.required("id", self.id.as_ref(), OrderId::check);
            v.required_nested("authorization_error", self.authorization_error.as_ref());
        });
    }
}

/// Batch of past orders, posted without an envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArrayOrders {
    pub orders: Vec<Order>,
}

impl ArrayOrders {
    /// Creates a batch from orders.
    #[must_use]
    pub const fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

impl Validate for ArrayOrders {
    fn validate_fields(&self, v: &mut Validator) {
        v.required_list("orders", Some(self.orders.as_slice()));
    }
}
