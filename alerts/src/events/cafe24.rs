//! Cafe24 push payloads.
//!
//! One flat `resource` object covers both the order-created (90023) and
//! order-cancelled (90026) pushes; the cancelled variant additionally fills
//! `cancel_date` and `event_code`. Amounts arrive as strings and boolean
//! flags as "T"/"F".

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Cafe24Event {
    pub event_no: i64,
    pub resource: Cafe24OrderResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cafe24OrderResource {
    #[serde(default)]
    pub mall_id: String,
    pub order_id: String,
    pub buyer_name: String,
    #[serde(default)]
    pub buyer_email: String,
    #[serde(default)]
    pub buyer_cellphone: String,
    #[serde(default)]
    pub order_date: String,
    #[serde(default)]
    pub payment_date: Option<String>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub order_price_amount: String,
    #[serde(default)]
    pub actual_payment_amount: String,
    #[serde(default)]
    pub shipping_fee: String,
    #[serde(default)]
    pub order_place_name: String,
    /// Comma-joined product names, parallel to `ordering_product_code`.
    pub ordering_product_name: String,
    #[serde(default)]
    pub ordering_product_code: String,
    #[serde(default)]
    pub paid: Option<String>,
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub first_order: Option<String>,
    /// Cancelled pushes only.
    #[serde(default)]
    pub cancel_date: Option<String>,
    #[serde(default)]
    pub event_code: Option<String>,
}
