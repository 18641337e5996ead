//! Transformer for per-line order status change events.

use super::join_user_inputs;
use crate::events::status::OrderStatusChange;
use crate::format::{delivery_company_text, format_amount};
use crate::output::ChatMessage;

/// Maps a status code to its announcement line.
///
/// Unknown codes pass through verbatim so a newly introduced status surfaces
/// in the channel instead of disappearing.
fn status_line(status: &str, receiver: &str) -> String {
    match status {
        "DEPOSIT_WAIT" => {
            format!(":hourglass: *[웹] {receiver}님의 입금을 기다리고 있습니다.* :hourglass:")
        }
        "PAY_DONE" => {
            format!(":white_check_mark: *[웹] {receiver}님의 결제가 완료되었습니다.* :white_check_mark:")
        }
        "PRODUCT_PREPARE" => {
            format!(":package: *[웹] {receiver}님의 상품을 준비중입니다.* :package:")
        }
        "DELIVERY_PREPARE" => {
            format!(":inbox_tray: *[웹] {receiver}님의 배송을 준비중입니다.* :inbox_tray:")
        }
        "DELIVERY_ING" => {
            format!(":truck: *[웹] {receiver}님의 상품이 배송중입니다.* :truck:")
        }
        "DELIVERY_DONE" => {
            format!(":mailbox_with_mail: *[웹] {receiver}님의 상품이 배달완료되었습니다.* :mailbox_with_mail:")
        }
        "BUY_CONFIRM" => {
            format!(":sparkles: *[웹] {receiver}님이 주문을 확정하셨습니다.* :sparkles:")
        }
        "CANCEL_DONE" => {
            format!(":sweat_drops: *[웹] {receiver}님이 주문을 취소하였습니다.* :sweat_drops:")
        }
        other => other.to_string(),
    }
}

/// Renders a status-change notification for one order line.
pub fn parse(change: &OrderStatusChange) -> ChatMessage {
    let invoice_text = match change.invoice_no.as_deref().filter(|s| !s.is_empty()) {
        Some(invoice) => format!(
            "{} {invoice}",
            delivery_company_text(&change.delivery_company_type)
        ),
        None => "송장번호 미등록".to_string(),
    };

    let mut product_text = format!("{} {}개", change.product_name, change.order_cnt.unwrap_or(1));
    if !change.option_name.is_empty() && !change.option_value.is_empty() {
        product_text.push_str(&format!(" ({}: {})", change.option_name, change.option_value));
    }
    if let Some(inputs) = change.user_inputs.as_deref().filter(|v| !v.is_empty()) {
        product_text.push_str(&format!(" [{}]", join_user_inputs(inputs)));
    }
    product_text.push_str(&format!(" - {}원", format_amount(change.adjusted_amt)));

    let lines = [
        status_line(&change.order_status_type, &change.receiver_name),
        format!("*주문번호:* {}", change.order_no),
        format!("*주문상품:* {product_text}"),
        format!("*수령인:* {}", change.receiver_name),
        format!("*송장정보:* {invoice_text}"),
    ];

    ChatMessage::mrkdwn_section(lines.join("\n"))
}
