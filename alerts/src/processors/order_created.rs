//! Transformer for standard mall order-created events.

use super::join_user_inputs;
use crate::events::order::{OrderEvent, OrderProductOption};
use crate::format::{format_amount, payment_method_text, platform_type_text};
use crate::output::ChatMessage;

/// Renders a new-order notification.
///
/// Order lines are flattened per product x option combination; the realized
/// payment amount comes from the order header, not from summing lines.
pub fn parse(event: &OrderEvent) -> ChatMessage {
    let order = &event.order;

    let product_text = order
        .order_products
        .iter()
        .flat_map(|product| {
            product
                .order_product_options
                .iter()
                .map(move |option| product_line(&product.product_name, option))
        })
        .collect::<Vec<_>>()
        .join("\n");

    let member_text = if order.member_yn == "Y" { "예" } else { "아니오" };
    let email = order
        .orderer_email
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or("미등록");

    let mut lines = vec![format!(
        ":tada: *[{}] {}님이 구매하셨습니다.* :tada:",
        platform_type_text(&order.platform_type),
        order.orderer_name
    )];
    lines.push(format!("*주문번호:* {}", order.order_no));
    lines.push(format!("*주문상품:* {product_text}"));
    lines.push(format!(
        "*결제수단:* {}",
        payment_method_text(&event.pay.pay_type)
    ));
    lines.push(format!("*실결제금액:* {} 원", format_amount(order.last_pay_amt)));
    lines.push("*회원상태:*".to_string());
    lines.push(format!("  - 회원: {member_text}"));
    lines.push(format!("  - 이메일: {email}"));

    ChatMessage::mrkdwn_section(lines.join("\n"))
}

/// One display line per purchased option:
/// `상품명 N개 (옵션명: 옵션값) [라벨: 값, ...] - 금액원`.
fn product_line(product_name: &str, option: &OrderProductOption) -> String {
    let mut line = format!("{product_name} {}개", option.order_cnt);

    if option.option_use_yn == "Y" && !option.option_name.is_empty() && !option.option_value.is_empty()
    {
        line.push_str(&format!(" ({}: {})", option.option_name, option.option_value));
    }

    if let Some(inputs) = option.user_inputs.as_deref().filter(|v| !v.is_empty()) {
        line.push_str(&format!(" [{}]", join_user_inputs(inputs)));
    }

    line.push_str(&format!(" - {}원", format_amount(option.adjusted_amt)));
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event() -> OrderEvent {
        serde_json::from_value(json!({
            "order": {
                "orderNo": "2024080612345",
                "ordererName": "김주문",
                "ordererEmail": "kim@example.com",
                "memberYn": "Y",
                "platformType": "MOBILE_APP",
                "lastPayAmt": 45000,
                "orderProducts": [
                    {
                        "productName": "프리미엄 티셔츠",
                        "orderProductOptions": [
                            {
                                "optionUseYn": "Y",
                                "optionName": "사이즈",
                                "optionValue": "L",
                                "orderCnt": 2,
                                "adjustedAmt": 30000
                            },
                            {
                                "optionUseYn": "N",
                                "optionName": "",
                                "optionValue": "",
                                "orderCnt": 1,
                                "adjustedAmt": 15000,
                                "userInputs": [
                                    { "inputLabel": "각인 문구", "inputValue": "HBD" }
                                ]
                            }
                        ]
                    }
                ]
            },
            "pay": { "payType": "NAVER_PAY" }
        }))
        .expect("sample event")
    }

    #[test]
    fn test_order_created_message_body() {
        let message = parse(&sample_event());

        assert!(message.text.contains("[앱] 김주문님이 구매하셨습니다."));
        assert!(message.text.contains("*주문번호:* 2024080612345"));
        assert!(message.text.contains("프리미엄 티셔츠 2개 (사이즈: L) - 30,000원"));
        // Disabled option pair is omitted, user input survives.
        assert!(message.text.contains("프리미엄 티셔츠 1개 [각인 문구: HBD] - 15,000원"));
        assert!(message.text.contains("*결제수단:* 네이버페이"));
        assert!(message.text.contains("*실결제금액:* 45,000 원"));
        assert!(message.text.contains("  - 회원: 예"));
        assert!(message.text.contains("  - 이메일: kim@example.com"));
    }

    #[test]
    fn test_order_created_one_line_per_option() {
        let message = parse(&sample_event());
        let product_section = message
            .text
            .lines()
            .filter(|line| line.contains("프리미엄 티셔츠"))
            .count();
        assert_eq!(product_section, 2);
    }

    #[test]
    fn test_missing_email_gets_placeholder() {
        let mut event = sample_event();
        event.order.orderer_email = None;
        let message = parse(&event);
        assert!(message.text.contains("  - 이메일: 미등록"));
    }

    #[test]
    fn test_guest_order() {
        let mut event = sample_event();
        event.order.member_yn = "N".to_string();
        let message = parse(&event);
        assert!(message.text.contains("  - 회원: 아니오"));
    }
}
