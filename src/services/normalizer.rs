// src/services/normalizer.rs
//! Reduces the nested flow run reply to a single display message.
//!
//! The upstream nests the message differently depending on how the flow's
//! output component is configured, and any level may be missing or null.
//! All lookups go through JSON pointers, so a missing step is just `None`.

use serde_json::Value;

/// Returned when none of the known locations carries text.
pub const NO_MESSAGE_FOUND: &str = "No message found in response";

/// Candidate locations, richest first.
const MESSAGE_POINTERS: [&str; 3] = [
    "/outputs/0/outputs/0/results/message/text",
    "/outputs/0/outputs/0/artifacts/message",
    "/outputs/0/outputs/0/messages/0/message",
];

/// Parsed buffered reply of a flow run. Kept as-is so it can be relayed verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse(Value);

impl UpstreamResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Non-empty string at `pointer`, if every step on the way exists.
    pub fn text_at(&self, pointer: &str) -> Option<&str> {
        self.0
            .pointer(pointer)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn session_id(&self) -> Option<&str> {
        self.text_at("/session_id")
    }
}

pub fn extract(response: &UpstreamResponse) -> String {
    MESSAGE_POINTERS
        .iter()
        .find_map(|pointer| response.text_at(pointer))
        .unwrap_or(NO_MESSAGE_FOUND)
        .to_string()
}
