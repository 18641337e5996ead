//! Standard mall order-created payload.
//!
//! The feed nests an order header and a payment object; order lines hang off
//! the header as products, each carrying one or more purchased options. Only
//! the fields the notification renders are modeled; unknown fields are
//! ignored on deserialization.

use crate::events::UserInput;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order: OrderInfo,
    pub pay: PayInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInfo {
    pub order_no: String,
    pub orderer_name: String,
    #[serde(default)]
    pub orderer_email: Option<String>,
    /// "Y" for members, "N" for guests.
    pub member_yn: String,
    pub platform_type: String,
    /// Realized payment amount for the whole order.
    pub last_pay_amt: f64,
    pub order_products: Vec<OrderProduct>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayInfo {
    pub pay_type: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    pub product_name: String,
    pub order_product_options: Vec<OrderProductOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProductOption {
    /// "Y" when the option name/value pair is meaningful for display.
    #[serde(default)]
    pub option_use_yn: String,
    #[serde(default)]
    pub option_name: String,
    #[serde(default)]
    pub option_value: String,
    #[serde(default)]
    pub user_inputs: Option<Vec<UserInput>>,
    pub order_cnt: u32,
    /// Line amount after discounts.
    pub adjusted_amt: f64,
}
