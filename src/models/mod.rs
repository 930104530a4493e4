//! Wire types exchanged with the review service.
//!
//! Outbound payloads implement [`Validate`](crate::validation::Validate);
//! every optional field is skipped when unset so the encoded bytes, and
//! therefore the signature, depend only on what the caller populated.

mod common;
mod id;
mod lifecycle;
mod notification;
mod order;
mod response;

#[cfg(test)]
mod models_tests;

pub use common::{
    Address, ClientDetails, Customer, DiscountCode, LineItem, PaymentDetails, ShippingLine,
};
pub use id::OrderId;
pub use lifecycle::{
    CancelOrder, ChargebackDetails, ChargebackOrder, DecisionDetails, DecisionOrder,
    DisputeDetails, FulfillmentDetails, FulfillmentOrder, RefundDetails, RefundOrder,
};
pub use notification::{Custom, Notification, NotificationOrder};
pub use order::{ArrayOrders, AuthorizationError, CheckoutDeniedOrder, CheckoutOrder, Order};
pub use response::{ErrorBody, Response, ResponseOrder};
