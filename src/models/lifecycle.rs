//! Post-purchase order events: cancellation, refunds, fulfillment,
//! merchant decisions and chargebacks.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::OrderId;
use crate::validation::{Validate, Validator, rules};

/// Full or partial cancellation of a previously submitted order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelOrder {
    pub id: Option<OrderId>,
    pub cancel_reason: Option<String>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Validate for CancelOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("id", self.id.as_ref(), OrderId::check);
        v.required("cancel_reason", self.cancel_reason.as_deref(), rules::text);
        v.required("cancelled_at", self.cancelled_at.as_ref(), rules::any);
    }
}

/// One refund issued against an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundDetails {
    pub refund_id: Option<String>,
    pub refunded_at: Option<DateTime<Utc>>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub reason: Option<String>,
}

impl Validate for RefundDetails {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("refund_id", self.refund_id.as_deref(), rules::text);
        v.required("amount", self.amount.as_ref(), rules::amount);
        v.required("currency", self.currency.as_deref(), rules::currency);
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundOrder {
    pub id: Option<OrderId>,
    pub refunds: Option<Vec<RefundDetails>>,
}

impl Validate for RefundOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("id", self.id.as_ref(), OrderId::check);
        v.required_list("refunds", self.refunds.as_deref());
    }
}

/// One shipment of an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentDetails {
    pub fulfillment_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub tracking_company: Option<String>,
    pub tracking_numbers: Option<String>,
    pub message: Option<String>,
    pub receipt: Option<String>,
}

impl Validate for FulfillmentDetails {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("fulfillment_id", self.fulfillment_id.as_deref(), rules::text);
        v.required("created_at", self.created_at.as_ref(), rules::any);
        v.required("status", self.status.as_deref(), rules::text);
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FulfillmentOrder {
    pub id: Option<OrderId>,
    pub fulfillments: Option<Vec<FulfillmentDetails>>,
}

impl Validate for FulfillmentOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("id", self.id.as_ref(), OrderId::check);
        v.required_list("fulfillments", self.fulfillments.as_deref());
    }
}

/// The merchant's own verdict on an order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionDetails {
    pub external_status: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub notes: Option<String>,
}

impl Validate for DecisionDetails {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("external_status", self.external_status.as_deref(), rules::text);
        v.required("decided_at", self.decided_at.as_ref(), rules::any);
        v.optional("amount", self.amount.as_ref(), rules::amount);
        v.optional("currency", self.currency.as_deref(), rules::currency);
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionOrder {
    pub id: Option<OrderId>,
    pub decision: Option<DecisionDetails>,
}

impl Validate for DecisionOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("id", self.id.as_ref(), OrderId::check);
        v.required_nested("decision", self.decision.as_ref());
    }
}

/// Chargeback as reported by the card issuer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargebackDetails {
    pub id: Option<String>,
    pub chargeback_at: Option<DateTime<Utc>>,
    pub chargeback_currency: Option<String>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    pub chargeback_amount: Option<Decimal>,
    pub reason_code: Option<String>,
    pub reason_description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub gateway: Option<String>,
    pub mid: Option<String>,
    pub arn: Option<String>,
    pub credit_card_company: Option<String>,
    pub respond_by: Option<DateTime<Utc>>,
    pub fee_amount: Option<String>,
    pub fee_currency: Option<String>,
}

impl Validate for ChargebackDetails {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("chargeback_at", self.chargeback_at.as_ref(), rules::any);
        v.required(
            "chargeback_currency",
            self.chargeback_currency.as_deref(),
            rules::currency,
        );
        v.required(
            "chargeback_amount",
            self.chargeback_amount.as_ref(),
            rules::amount,
        );
        v.required("reason_code", self.reason_code.as_deref(), rules::text);
    }
}

/// Merchant's response to a chargeback dispute.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeDetails {
    pub case_id: Option<String>,
    pub status: Option<String>,
    pub disputed_at: Option<DateTime<Utc>>,
    pub expected_resolution_date: Option<DateTime<Utc>>,
    pub dispute_type: Option<String>,
    pub issuer_poc_phone_number: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargebackOrder {
    pub id: Option<OrderId>,
    pub chargeback_details: Option<ChargebackDetails>,
    pub fulfillment: Option<FulfillmentDetails>,
    pub dispute_details: Option<DisputeDetails>,
}

impl Validate for ChargebackOrder {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("id", self.id.as_ref(), OrderId::check);
        v.required_nested("chargeback_details", self.chargeback_details.as_ref());
        v.optional_nested("fulfillment", self.fulfillment.as_ref());
    }
}
