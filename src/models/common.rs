//! Records nested inside orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::validation::{Validate, Validator, rules};

/// Buyer account details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub verified_email: Option<bool>,
    pub orders_count: Option<u32>,
    pub account_type: Option<String>,
}

impl Validate for Customer {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("email", self.email.as_deref(), rules::email);
        v.required("first_name", self.first_name.as_deref(), rules::text);
        v.required("last_name", self.last_name.as_deref(), rules::text);
    }
}

/// Postal address used for billing and shipping.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub province_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
}

impl Validate for Address {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("first_name", self.first_name.as_deref(), rules::text);
        v.required("last_name", self.last_name.as_deref(), rules::text);
        v.required("address1", self.address1.as_deref(), rules::text);
        v.required("city", self.city.as_deref(), rules::text);
        v.required("country_code", self.country_code.as_deref(), rules::country_code);
    }
}

/// One purchased product line.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub title: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub quantity: Option<u32>,
    pub product_id: Option<String>,
    pub sku: Option<String>,
    pub variant_id: Option<String>,
    pub variant_title: Option<String>,
    pub vendor: Option<String>,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub requires_shipping: Option<bool>,
}

impl Validate for LineItem {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("title", self.title.as_deref(), rules::text);
        v.required("price", self.price.as_ref(), rules::amount);
        v.required("quantity", self.quantity.as_ref(), rules::quantity);
    }
}

/// Shipping method chosen for the order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingLine {
    pub title: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub price: Option<Decimal>,
    pub code: Option<String>,
}

impl Validate for ShippingLine {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("title", self.title.as_deref(), rules::text);
        v.required("price", self.price.as_ref(), rules::amount);
    }
}

/// Discount applied to the order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountCode {
    pub code: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
}

impl Validate for DiscountCode {
    fn validate_fields(&self, v: &mut Validator) {
        v.optional("code", self.code.as_deref(), rules::text);
        v.optional("amount", self.amount.as_ref(), rules::amount);
    }
}

/// Card payment details as reported by the gateway.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDetails {
    pub credit_card_bin: Option<String>,
    pub credit_card_company: Option<String>,
    pub credit_card_number: Option<String>,
    pub avs_result_code: Option<String>,
    pub cvv_result_code: Option<String>,
    pub authorization_id: Option<String>,
}

impl Validate for PaymentDetails {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("credit_card_bin", self.credit_card_bin.as_deref(), rules::card_bin);
        v.required(
            "credit_card_company",
            self.credit_card_company.as_deref(),
            rules::text,
        );
        v.optional("avs_result_code", self.avs_result_code.as_deref(), rules::result_code);
        v.optional("cvv_result_code", self.cvv_result_code.as_deref(), rules::result_code);
    }
}

/// Browser details captured at checkout.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientDetails {
    pub accept_language: Option<String>,
    pub user_agent: Option<String>,
}
