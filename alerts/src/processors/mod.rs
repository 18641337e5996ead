//! Event transformers: one per inbound event shape.
//!
//! Each transformer is a stateless `parse` function from a typed payload to
//! a [`ChatMessage`](crate::output::ChatMessage):
//!
//! - [`order_created`] - standard mall order-created events
//! - [`order_status`] - per-line order status changes
//! - [`cafe24`] - Cafe24 order created/cancelled pushes

pub mod cafe24;
pub mod order_created;
pub mod order_status;

use crate::events::UserInput;

/// Joins buyer free-text inputs as `label: value, label: value`.
pub(crate) fn join_user_inputs(inputs: &[UserInput]) -> String {
    inputs
        .iter()
        .map(|input| format!("{}: {}", input.input_label, input.input_value))
        .collect::<Vec<_>>()
        .join(", ")
}
