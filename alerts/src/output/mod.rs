//! Outbound message schema and webhook delivery.
//!
//! This module provides:
//! - [`ChatMessage`] - The chat-webhook JSON document (plain text + blocks)
//! - [`Block`] / [`TextObject`] - The block-kit style message elements
//! - [`WebhookClient`] - Single-shot POST delivery to a configured URL

mod message;
mod webhook;

pub use message::{Attachment, AttachmentField, Block, ChatMessage, TextKind, TextObject};
pub use webhook::{WebhookClient, WebhookError};
