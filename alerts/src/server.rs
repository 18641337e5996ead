//! HTTP entry point: the relay route plus a health probe.
//!
//! The handler validates the body, resolves the event kind, runs the
//! matching transformer, dispatches to the resolved channel(s), and maps the
//! outcome to a JSON response. Nothing survives a request: the only shared
//! state is the pair of webhook clients built at startup.

use crate::config::{AppConfig, ConfigError};
use crate::events::cafe24::Cafe24Event;
use crate::events::order::OrderEvent;
use crate::events::status::OrderStatusChange;
use crate::events::{self, EventKind, RelayQuery};
use crate::output::{ChatMessage, WebhookClient};
use crate::processors;
use anyhow::Context;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

const SUCCESS_MESSAGE: &str = "메시지가 성공적으로 전송되었습니다.";
const MISSING_BODY_MESSAGE: &str = "요청 본문이 필요합니다.";

/// Shared state: one client per outbound channel, built once at startup so a
/// bad webhook URL fails before the listener binds.
pub struct AppState {
    order_create: WebhookClient,
    order_status: WebhookClient,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            order_create: WebhookClient::new(&config.order_create_webhook_url)?,
            order_status: WebhookClient::new(&config.order_status_webhook_url)?,
        })
    }
}

#[derive(Debug, Error)]
enum RelayError {
    #[error("{0}")]
    BadRequest(String),
    #[error("메시지 전송 중 오류가 발생했습니다.")]
    Dispatch,
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match &self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Dispatch => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Builds the relay router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(relay))
        .route("/health", get(health))
        .with_state(state)
}

/// Binds the configured address and serves the relay until shutdown.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding to {}", config.bind_addr))?;
    log::info!("relay listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("relay server exited")?;
    log::info!("relay stopped");
    Ok(())
}

/// POST / - the relay endpoint.
async fn relay(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RelayQuery>,
    body: Bytes,
) -> Response {
    match handle_relay(&state, &query, &body).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": SUCCESS_MESSAGE, "status": 200 })),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

/// GET /health - liveness probe.
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_relay(
    state: &AppState,
    query: &RelayQuery,
    body: &[u8],
) -> Result<(), RelayError> {
    if body.is_empty() {
        return Err(RelayError::BadRequest(MISSING_BODY_MESSAGE.to_string()));
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| {
        RelayError::BadRequest(format!("요청 본문을 JSON으로 해석할 수 없습니다: {e}"))
    })?;

    let kind = events::resolve(query, &value).map_err(|e| RelayError::BadRequest(e.to_string()))?;
    log::info!("relaying event: kind={kind:?}");

    match kind {
        EventKind::OrderCreated => {
            let event: OrderEvent = decode(value)?;
            let message = processors::order_created::parse(&event);
            dispatch(&state.order_create, &message).await
        }
        EventKind::Cafe24OrderCreated => {
            let event: Cafe24Event = decode(value)?;
            let message = processors::cafe24::parse_order(&event);
            dispatch(&state.order_create, &message).await
        }
        EventKind::Cafe24OrderCancelled => {
            let event: Cafe24Event = decode(value)?;
            let message = processors::cafe24::parse_cancel(&event);
            dispatch(&state.order_create, &message).await
        }
        EventKind::OrderStatusChanged => {
            let changes: Vec<OrderStatusChange> = decode(value)?;
            let mut failed = false;
            // One message per line event, dispatched sequentially.
            // Cancellations surface on the creation channel as well.
            for change in &changes {
                let message = processors::order_status::parse(change);
                if change.is_cancellation()
                    && dispatch(&state.order_create, &message).await.is_err()
                {
                    failed = true;
                }
                if dispatch(&state.order_status, &message).await.is_err() {
                    failed = true;
                }
            }
            if failed {
                Err(RelayError::Dispatch)
            } else {
                Ok(())
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, RelayError> {
    serde_json::from_value(value).map_err(|e| {
        RelayError::BadRequest(format!("이벤트 페이로드 형식이 올바르지 않습니다: {e}"))
    })
}

async fn dispatch(client: &WebhookClient, message: &ChatMessage) -> Result<(), RelayError> {
    client.send(message).await.map_err(|e| {
        log::error!("webhook dispatch failed: {e}");
        RelayError::Dispatch
    })
}

/// Completes on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    log::info!("shutdown signal received");
}
