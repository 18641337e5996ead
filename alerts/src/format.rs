//! Display formatting shared by every message transformer.
//!
//! Pure converters: Korean-locale amount grouping, KST timestamp rendering,
//! and code-to-label lookup tables for payment methods, sales channels, and
//! delivery carriers.

use chrono::{DateTime, FixedOffset};

/// Korea Standard Time (UTC+9). All timestamps render in this offset no
/// matter what offset the input carried.
fn kst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("UTC+9 is a valid offset")
}

/// Formats an amount with Korean-locale thousands separators.
///
/// Fractional digits are preserved exactly; there is no rounding to an
/// integer. `NaN` renders as `"NaN"` so malformed upstream values stay
/// visible instead of being masked.
///
/// # Examples
///
/// ```
/// # use order_alerts::format::format_amount;
/// assert_eq!(format_amount(1000.0), "1,000");
/// assert_eq!(format_amount(1234.56), "1,234.56");
/// ```
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let raw = value.to_string();
    // Scientific notation is outside any realistic money range.
    if raw.contains(['e', 'E']) {
        return raw;
    }

    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (raw.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a string-typed amount (Cafe24 sends amounts as strings).
///
/// A string that does not parse as a number propagates as `"NaN"`.
pub fn format_price(price: &str) -> String {
    format_amount(price.trim().parse::<f64>().unwrap_or(f64::NAN))
}

/// Renders an RFC 3339 timestamp as `YYYY-MM-DD HH:mm` in KST.
///
/// The input offset is converted, not truncated: `2020-07-17T06:28:14Z` and
/// `2020-07-17T15:28:14+09:00` both render `2020-07-17 15:28`. An empty
/// input yields an empty string; an unparseable input is logged and returned
/// unchanged, never a panic.
pub fn format_date_string(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }

    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => parsed
            .with_timezone(&kst())
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        Err(e) => {
            log::error!("failed to parse date string '{iso}': {e}");
            iso.to_string()
        }
    }
}

/// Maps a payment method code to its Korean label, case-insensitively.
/// Unknown codes pass through verbatim.
pub fn payment_method_text(pay_type: &str) -> String {
    match pay_type.to_uppercase().as_str() {
        "CREDIT_CARD" => "카드".to_string(),
        "ACCOUNT" => "무통장 입금".to_string(),
        "NAVER_PAY" => "네이버페이".to_string(),
        "KAKAO_PAY" => "카카오페이".to_string(),
        "PAYCO" => "페이코".to_string(),
        "ACCUMULATION" => "적립금".to_string(),
        "MILEAGE" => "마일리지".to_string(),
        _ => pay_type.to_string(),
    }
}

/// Maps a sales-channel code to 웹/앱. Unknown codes fall back to 웹 -- the
/// fallback is deliberate, not an error.
pub fn platform_type_text(platform_type: &str) -> &'static str {
    match platform_type.to_uppercase().as_str() {
        "MOBILE_APP" => "앱",
        _ => "웹",
    }
}

/// Maps a delivery carrier code to its Korean name. Unknown codes pass
/// through verbatim.
pub fn delivery_company_text(company_type: &str) -> String {
    match company_type.to_uppercase().as_str() {
        "CJ" => "CJ대한통운".to_string(),
        "LOTTE" => "롯데택배".to_string(),
        "HANJIN" => "한진택배".to_string(),
        "POST" => "우체국택배".to_string(),
        "LOGEN" => "로젠택배".to_string(),
        "KGB" => "KGB택배".to_string(),
        "KYOUNG_DONG" => "경동택배".to_string(),
        "DAESIN" => "대신택배".to_string(),
        "ILYANG" => "일양로지스".to_string(),
        "CHUNIL" => "천일택배".to_string(),
        "CVSNET" => "편의점택배".to_string(),
        "DONG_BU" => "동부택배".to_string(),
        "AIRLIFT" => "에어리프트".to_string(),
        "QUICK_START" => "퀵스타트".to_string(),
        "DAILY_EXPRESS" => "일반택배".to_string(),
        "HOMEPICK" => "홈픽택배".to_string(),
        "HDEXP" => "합동택배".to_string(),
        "SUPREME_EXPRESS" => "서프림익스프레스".to_string(),
        "FRESH_SOLUTION" => "프레시솔루션".to_string(),
        _ => company_type.to_string(),
    }
}

/// Maps a Cafe24 payment-method code to its Korean label, case-insensitively.
/// Unknown codes pass through verbatim.
pub fn cafe24_payment_method_text(payment_method: &str) -> String {
    match payment_method.to_lowercase().as_str() {
        "card" => "신용카드".to_string(),
        "cash" => "무통장입금".to_string(),
        "tcash" => "계좌이체".to_string(),
        "cell" => "휴대폰 결제".to_string(),
        "prepaid" => "선불금".to_string(),
        "credit" => "예치금".to_string(),
        "point" => "적립금".to_string(),
        "pointfy" => "통합포인트".to_string(),
        "cvs" => "편의점 결제".to_string(),
        "cod" => "착불".to_string(),
        "naverpay" => "네이버페이".to_string(),
        "kakaopay" => "카카오페이".to_string(),
        "payco" => "페이코".to_string(),
        _ => payment_method.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_thousands_grouping() {
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1000000.0), "1,000,000");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
    }

    #[test]
    fn test_format_amount_preserves_fraction() {
        // No forced rounding to an integer.
        assert_eq!(format_amount(1234.56), "1,234.56");
        assert_eq!(format_amount(0.5), "0.5");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.5");
        assert_eq!(format_amount(-100.0), "-100");
    }

    #[test]
    fn test_format_amount_nan_is_visible() {
        assert_eq!(format_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("1000"), "1,000");
        assert_eq!(format_price("1000000"), "1,000,000");
        assert_eq!(format_price("1234.56"), "1,234.56");
        assert_eq!(format_price("25000.00"), "25,000");
    }

    #[test]
    fn test_format_price_malformed_propagates_nan() {
        assert_eq!(format_price("not-a-number"), "NaN");
        assert_eq!(format_price(""), "NaN");
    }

    #[test]
    fn test_format_date_string_converts_to_kst() {
        // Already KST and UTC render identically once converted.
        assert_eq!(
            format_date_string("2020-07-17T15:28:14+09:00"),
            "2020-07-17 15:28"
        );
        assert_eq!(format_date_string("2020-07-17T06:28:14Z"), "2020-07-17 15:28");
    }

    #[test]
    fn test_format_date_string_crosses_date_line() {
        // 23:30 UTC is 08:30 the next day in KST.
        assert_eq!(format_date_string("2020-12-31T23:30:00Z"), "2021-01-01 08:30");
    }

    #[test]
    fn test_format_date_string_empty() {
        assert_eq!(format_date_string(""), "");
    }

    #[test]
    fn test_format_date_string_invalid_returns_input() {
        assert_eq!(format_date_string("invalid-date"), "invalid-date");
    }

    #[test]
    fn test_payment_method_text() {
        assert_eq!(payment_method_text("CREDIT_CARD"), "카드");
        assert_eq!(payment_method_text("ACCOUNT"), "무통장 입금");
        assert_eq!(payment_method_text("NAVER_PAY"), "네이버페이");
        assert_eq!(payment_method_text("MILEAGE"), "마일리지");
    }

    #[test]
    fn test_payment_method_text_case_insensitive() {
        assert_eq!(payment_method_text("credit_card"), "카드");
        assert_eq!(payment_method_text("kakao_pay"), "카카오페이");
    }

    #[test]
    fn test_payment_method_text_unknown_passes_through() {
        assert_eq!(payment_method_text("UNKNOWN_TYPE"), "UNKNOWN_TYPE");
    }

    #[test]
    fn test_platform_type_text() {
        assert_eq!(platform_type_text("PC"), "웹");
        assert_eq!(platform_type_text("PC_WEB"), "웹");
        assert_eq!(platform_type_text("MOBILE_WEB"), "웹");
        assert_eq!(platform_type_text("MOBILE_APP"), "앱");
        assert_eq!(platform_type_text("mobile_app"), "앱");
    }

    #[test]
    fn test_platform_type_text_defaults_to_web() {
        assert_eq!(platform_type_text("UNKNOWN"), "웹");
        assert_eq!(platform_type_text(""), "웹");
    }

    #[test]
    fn test_delivery_company_text() {
        assert_eq!(delivery_company_text("CJ"), "CJ대한통운");
        assert_eq!(delivery_company_text("POST"), "우체국택배");
        assert_eq!(delivery_company_text("cj"), "CJ대한통운");
        assert_eq!(delivery_company_text("SOME_CARRIER"), "SOME_CARRIER");
    }

    #[test]
    fn test_cafe24_payment_method_text() {
        assert_eq!(cafe24_payment_method_text("card"), "신용카드");
        assert_eq!(cafe24_payment_method_text("CARD"), "신용카드");
        assert_eq!(cafe24_payment_method_text("cash"), "무통장입금");
        assert_eq!(cafe24_payment_method_text("point"), "적립금");
        assert_eq!(cafe24_payment_method_text("bitcoin"), "bitcoin");
    }
}
