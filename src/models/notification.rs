//! Inbound status-update callbacks.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::OrderId;

/// Webhook body pushed by the service when a review status changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub order: NotificationOrder,
}

impl Notification {
    #[must_use]
    pub const fn order(&self) -> &NotificationOrder {
        &self.order
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationOrder {
    pub id: Option<OrderId>,
    pub status: Option<String>,
    pub old_status: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub decision_code: Option<String>,
    pub custom: Option<Custom>,
}

/// Merchant-defined data echoed back with the notification.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Custom {
    pub app_dom_id: Option<String>,
}
