//! Webhook delivery for chat messages.
//!
//! One POST per message against a Slack-compatible incoming webhook. The
//! caller decides how a failure maps onto its own response; there is no
//! retry or queueing at this layer.

use crate::config::ConfigError;
use crate::output::ChatMessage;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Client bound to a single outbound webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    url: String,
    client: reqwest::Client,
}

impl WebhookClient {
    /// Creates a client for `url`.
    ///
    /// An empty URL is a configuration error and is rejected here rather
    /// than at send time.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ConfigError::EmptyWebhookUrl);
        }
        Ok(Self {
            url,
            client: reqwest::Client::new(),
        })
    }

    /// POSTs `message` as a JSON document.
    ///
    /// A non-2xx response is a failure; its body text is captured for
    /// diagnostics. Transport errors surface as [`WebhookError::Transport`].
    pub async fn send(&self, message: &ChatMessage) -> Result<(), WebhookError> {
        let resp = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            log::debug!("webhook delivered: status={status}");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(WebhookError::Status { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_rejected_at_construction() {
        assert!(matches!(
            WebhookClient::new(""),
            Err(ConfigError::EmptyWebhookUrl)
        ));
        assert!(matches!(
            WebhookClient::new("   "),
            Err(ConfigError::EmptyWebhookUrl)
        ));
    }

    #[test]
    fn test_non_empty_url_constructs() {
        assert!(WebhookClient::new("https://hooks.example.com/T000/B000").is_ok());
    }
}
