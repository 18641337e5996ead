//! Environment configuration.
//!
//! Everything the relay needs arrives through environment variables (a
//! `.env` file is honored when present, loaded in `main`). Required webhook
//! URLs are validated here, at startup, so a misconfigured deployment fails
//! before it binds the listen socket.

use std::env;
use std::net::SocketAddr;
use thiserror::Error;

/// Creation-channel webhook URL (required).
pub const ORDER_CREATE_WEBHOOK_ENV: &str = "SLACK_ORDER_CREATE_WEBHOOK_URL";
/// Status-change-channel webhook URL (required).
pub const ORDER_STATUS_WEBHOOK_ENV: &str = "SLACK_ORDER_STATUS_CHANGE_WEBHOOK_URL";
/// Listen address (optional).
pub const BIND_ADDR_ENV: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("필수 환경 변수 {0}이(가) 설정되지 않았습니다.")]
    MissingEnv(&'static str),
    #[error("웹훅 URL이 비어 있습니다.")]
    EmptyWebhookUrl,
    #[error("잘못된 바인드 주소 '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },
}

/// Relay configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Creation-channel webhook: new orders and cancellations.
    pub order_create_webhook_url: String,
    /// Status-change-channel webhook: lifecycle updates.
    pub order_status_webhook_url: String,
    /// Listen address for the inbound HTTP endpoint.
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads configuration from the environment.
    ///
    /// A required variable that is unset or empty fails here; the error is
    /// never deferred to first use.
    pub fn from_env() -> Result<Self, ConfigError> {
        let order_create_webhook_url = require_env(ORDER_CREATE_WEBHOOK_ENV)?;
        let order_status_webhook_url = require_env(ORDER_STATUS_WEBHOOK_ENV)?;

        let addr_raw = env::var(BIND_ADDR_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr_raw
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                addr: addr_raw.clone(),
                source,
            })?;

        Ok(Self {
            order_create_webhook_url,
            order_status_webhook_url,
            bind_addr,
        })
    }
}

/// Reads a required environment variable; empty counts as missing.
fn require_env(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnv(name)),
    }
}
