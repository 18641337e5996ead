//! Per-line order status change payload.
//!
//! Unlike the order-created feed, status changes arrive one per order line:
//! the inbound body for `ORDER_STATUS_CHANGE` is an array of these.

use crate::events::UserInput;
use serde::Deserialize;

/// Status code for a completed cancellation.
pub const STATUS_CANCEL_DONE: &str = "CANCEL_DONE";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusChange {
    pub order_no: String,
    pub product_name: String,
    pub order_status_type: String,
    pub receiver_name: String,
    #[serde(default)]
    pub invoice_no: Option<String>,
    #[serde(default)]
    pub delivery_company_type: String,
    pub adjusted_amt: f64,
    #[serde(default)]
    pub option_name: String,
    #[serde(default)]
    pub option_value: String,
    #[serde(default)]
    pub order_cnt: Option<u32>,
    #[serde(default)]
    pub user_inputs: Option<Vec<UserInput>>,
}

impl OrderStatusChange {
    /// Whether this line routes to the order-creation channel in addition to
    /// the status-change channel.
    pub fn is_cancellation(&self) -> bool {
        self.order_status_type == STATUS_CANCEL_DONE
    }
}
