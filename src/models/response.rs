//! Decoded service replies.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::OrderId;

/// Reply to any outbound operation.
///
/// A successful reply carries [`order`](Self::order); a rejected one
/// carries [`error`](Self::error). Checkout replies arrive under a
/// `checkout` key and are aliased onto `order` while decoding.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub order: Option<ResponseOrder>,
    pub error: Option<ErrorBody>,
    pub warnings: Option<Vec<String>>,
}

impl Response {
    /// Id of the reviewed order, if the reply carried one.
    #[must_use]
    pub fn order_id(&self) -> Option<&OrderId> {
        self.order.as_ref().and_then(|o| o.id.as_ref())
    }

    /// Review status of the order, if the reply carried one.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.order.as_ref().and_then(|o| o.status.as_deref())
    }
}

/// Review outcome for a single order.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseOrder {
    pub id: Option<OrderId>,
    pub status: Option<String>,
    pub old_status: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub decision_code: Option<String>,
}

/// Error object returned alongside a non-200 status.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub message: Option<String>,
    /// Per-field messages, keyed by wire field name when present.
    pub errors: Option<serde_json::Value>,
}
