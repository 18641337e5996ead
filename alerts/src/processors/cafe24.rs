//! Transformers for Cafe24 order pushes (created and cancelled).
//!
//! Both variants share the flat resource shape: comma-joined product lists,
//! string-typed amounts, and "T"/"F" flags. The cancelled variant adds a
//! cancellation timestamp and an event code.

use crate::events::cafe24::{Cafe24Event, Cafe24OrderResource};
use crate::format::{cafe24_payment_method_text, format_date_string, format_price};
use crate::output::ChatMessage;

/// Renders a Cafe24 order-created notification (event_no 90023).
pub fn parse_order(event: &Cafe24Event) -> ChatMessage {
    let r = &event.resource;

    let payment_status = if r.paid.as_deref() == Some("T") {
        "결제완료"
    } else {
        "미결제"
    };
    let payment_date = payment_date_text(r);

    let mut lines = vec![format!(
        ":tada: *[CAFE24] {}님이 구매하셨습니다.* :tada:",
        r.buyer_name
    )];
    lines.push(format!("*주문번호:* {}", r.order_id));
    lines.push(format!("*주문상품:* {}", product_text(r)));
    lines.push(format!(
        "*결제수단:* {}",
        cafe24_payment_method_text(&r.payment_method)
    ));
    lines.push(format!(
        "*실결제금액:* {} 원",
        format_price(&r.actual_payment_amount)
    ));
    lines.push(format!("*이메일:* {}", contact_or_placeholder(&r.buyer_email)));
    lines.push(format!("*연락처:* {}", contact_or_placeholder(&r.buyer_cellphone)));
    lines.push("*회원상태:*".to_string());
    lines.extend(member_status_lines(r));
    lines.push(String::new());
    lines.push("*추가정보:*".to_string());
    lines.push(format!("  - 쇼핑몰: {}", r.mall_id));
    lines.push(format!("  - 주문일시: {}", format_date_string(&r.order_date)));
    lines.push(format!("  - 결제일시: {payment_date}"));
    lines.push(format!("  - 결제상태: {payment_status}"));
    lines.push(format!("  - 주문경로: {}", r.order_place_name));
    lines.push(format!("  - 주문금액: {}원", format_price(&r.order_price_amount)));
    lines.push(format!("  - 배송비: {}원", format_price(&r.shipping_fee)));
    lines.push(String::new());

    ChatMessage::mrkdwn_section(lines.join("\n"))
}

/// Renders a Cafe24 order-cancelled notification (event_no 90026).
pub fn parse_cancel(event: &Cafe24Event) -> ChatMessage {
    let r = &event.resource;

    let cancel_date = match r.cancel_date.as_deref().filter(|s| !s.is_empty()) {
        Some(date) => format_date_string(date),
        None => "취소일자 정보 없음".to_string(),
    };
    let event_code = r
        .event_code
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("정보 없음");

    let mut lines = vec![format!(
        ":x: *[CAFE24] {}님의 주문이 취소되었습니다.* :x:",
        r.buyer_name
    )];
    lines.push(format!("*주문번호:* {}", r.order_id));
    lines.push(format!("*취소상품:* {}", product_text(r)));
    lines.push(format!(
        "*결제수단:* {}",
        cafe24_payment_method_text(&r.payment_method)
    ));
    lines.push(format!(
        "*취소금액:* {} 원",
        format_price(&r.actual_payment_amount)
    ));
    lines.push(format!("*이메일:* {}", contact_or_placeholder(&r.buyer_email)));
    lines.push(format!("*연락처:* {}", contact_or_placeholder(&r.buyer_cellphone)));
    lines.push("*회원상태:*".to_string());
    lines.extend(member_status_lines(r));
    lines.push(String::new());
    lines.push("*추가정보:*".to_string());
    lines.push(format!("  - 주문일시: {}", format_date_string(&r.order_date)));
    lines.push(format!("  - 결제일시: {}", payment_date_text(r)));
    lines.push(format!("  - 취소일시: {cancel_date}"));
    lines.push(format!("  - 취소코드: {event_code}"));
    lines.push(format!("  - 주문경로: {}", r.order_place_name));
    lines.push(format!(
        "  - 원주문금액: {}원",
        format_price(&r.order_price_amount)
    ));
    lines.push(format!("  - 배송비: {}원", format_price(&r.shipping_fee)));
    lines.push(String::new());

    ChatMessage::mrkdwn_section(lines.join("\n"))
}

/// One line per product from the comma-joined name/code lists, the code in
/// parentheses when present.
fn product_text(resource: &Cafe24OrderResource) -> String {
    let codes: Vec<&str> = resource.ordering_product_code.split(',').collect();
    resource
        .ordering_product_name
        .split(',')
        .enumerate()
        .map(|(idx, name)| {
            let code = codes.get(idx).map(|c| c.trim()).unwrap_or("");
            if code.is_empty() {
                name.trim().to_string()
            } else {
                format!("{} ({code})", name.trim())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn member_status_lines(resource: &Cafe24OrderResource) -> Vec<String> {
    let first_order = if resource.first_order.as_deref() == Some("T") {
        "예"
    } else {
        "아니오"
    };
    let mut lines = Vec::new();
    match resource.member_id.as_deref().filter(|s| !s.is_empty()) {
        Some(member_id) => {
            lines.push("  - 회원여부: 회원".to_string());
            lines.push(format!("  - 회원ID: {member_id}"));
        }
        None => lines.push("  - 회원여부: 비회원".to_string()),
    }
    lines.push(format!("  - 첫주문: {first_order}"));
    lines
}

fn payment_date_text(resource: &Cafe24OrderResource) -> String {
    match resource.payment_date.as_deref().filter(|s| !s.is_empty()) {
        Some(date) => format_date_string(date),
        None => "미결제".to_string(),
    }
}

fn contact_or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        "미등록"
    } else {
        value
    }
}
