//! Order-event notification relay.
//!
//! Receives e-commerce order lifecycle webhooks over HTTP, renders each
//! event as a Korean chat message, and forwards it to the Slack incoming
//! webhook for the matching channel (order creation vs. status change).

pub mod config;
pub mod events;
pub mod format;
pub mod output;
pub mod processors;
pub mod server;
