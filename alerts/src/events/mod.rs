//! Inbound event payloads and event-type resolution.
//!
//! Two feeds arrive on the same endpoint: the standard mall feed (camelCase
//! JSON, discriminated by the `eventType` query parameter) and Cafe24 push
//! events (snake_case JSON, discriminated by a numeric `event_no` in the
//! body when `shopType=CAFE24` is present).

pub mod cafe24;
pub mod order;
pub mod status;

use serde::Deserialize;
use thiserror::Error;

/// Cafe24 push code for a created order.
const CAFE24_ORDER_CREATED_CODE: i64 = 90023;
/// Cafe24 push code for a cancelled order.
const CAFE24_ORDER_CANCELLED_CODE: i64 = 90026;

const SHOP_TYPE_CAFE24: &str = "CAFE24";

/// Supported inbound event kinds. The enumeration is closed: anything
/// outside it is a client error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    OrderCreated,
    OrderStatusChanged,
    Cafe24OrderCreated,
    Cafe24OrderCancelled,
}

/// Relay query parameters: `?eventType=...&shopType=...`.
#[derive(Debug, Default, Deserialize)]
pub struct RelayQuery {
    #[serde(rename = "eventType")]
    pub event_type: Option<String>,
    #[serde(rename = "shopType")]
    pub shop_type: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("eventType 쿼리 파라미터가 필요합니다.")]
    MissingEventType,
    #[error("지원하지 않는 이벤트 타입: {0}")]
    UnsupportedEventType(String),
    #[error("event_no 필드가 필요합니다.")]
    MissingEventNo,
    #[error("지원하지 않는 이벤트 번호: {0}")]
    UnsupportedEventNo(i64),
}

/// Buyer free-text input attached to an order line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub input_label: String,
    pub input_value: String,
}

/// Determines the event kind for a request.
///
/// `shopType=CAFE24` switches resolution to the numeric `event_no` table in
/// the body; every other request is classified by the `eventType` query
/// parameter. A missing or unmapped discriminant is an error.
pub fn resolve(query: &RelayQuery, body: &serde_json::Value) -> Result<EventKind, ResolveError> {
    if query
        .shop_type
        .as_deref()
        .is_some_and(|s| s.eq_ignore_ascii_case(SHOP_TYPE_CAFE24))
    {
        let event_no = body
            .get("event_no")
            .and_then(|v| v.as_i64())
            .ok_or(ResolveError::MissingEventNo)?;
        return match event_no {
            CAFE24_ORDER_CREATED_CODE => Ok(EventKind::Cafe24OrderCreated),
            CAFE24_ORDER_CANCELLED_CODE => Ok(EventKind::Cafe24OrderCancelled),
            other => Err(ResolveError::UnsupportedEventNo(other)),
        };
    }

    match query.event_type.as_deref() {
        Some("CREATE_ORDER") => Ok(EventKind::OrderCreated),
        Some("ORDER_STATUS_CHANGE") => Ok(EventKind::OrderStatusChanged),
        Some(other) => Err(ResolveError::UnsupportedEventType(other.to_string())),
        None => Err(ResolveError::MissingEventType),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(event_type: Option<&str>, shop_type: Option<&str>) -> RelayQuery {
        RelayQuery {
            event_type: event_type.map(str::to_string),
            shop_type: shop_type.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_standard_event_types() {
        let body = json!({});
        assert_eq!(
            resolve(&query(Some("CREATE_ORDER"), None), &body),
            Ok(EventKind::OrderCreated)
        );
        assert_eq!(
            resolve(&query(Some("ORDER_STATUS_CHANGE"), None), &body),
            Ok(EventKind::OrderStatusChanged)
        );
    }

    #[test]
    fn test_resolve_missing_event_type() {
        assert_eq!(
            resolve(&query(None, None), &json!({})),
            Err(ResolveError::MissingEventType)
        );
    }

    #[test]
    fn test_resolve_unsupported_event_type_names_the_value() {
        let err = resolve(&query(Some("DELETE_ORDER"), None), &json!({})).unwrap_err();
        assert_eq!(err, ResolveError::UnsupportedEventType("DELETE_ORDER".to_string()));
        assert!(err.to_string().contains("DELETE_ORDER"));
    }

    #[test]
    fn test_resolve_cafe24_event_codes() {
        let created = json!({ "event_no": 90023, "resource": {} });
        let cancelled = json!({ "event_no": 90026, "resource": {} });
        assert_eq!(
            resolve(&query(None, Some("CAFE24")), &created),
            Ok(EventKind::Cafe24OrderCreated)
        );
        assert_eq!(
            resolve(&query(None, Some("cafe24")), &cancelled),
            Ok(EventKind::Cafe24OrderCancelled)
        );
    }

    #[test]
    fn test_resolve_cafe24_unmapped_code_never_defaults() {
        let body = json!({ "event_no": 90099 });
        assert_eq!(
            resolve(&query(None, Some("CAFE24")), &body),
            Err(ResolveError::UnsupportedEventNo(90099))
        );
    }

    #[test]
    fn test_resolve_cafe24_missing_code() {
        // An eventType alongside shopType does not rescue a missing code.
        assert_eq!(
            resolve(&query(Some("CREATE_ORDER"), Some("CAFE24")), &json!({})),
            Err(ResolveError::MissingEventNo)
        );
    }
}
