// src/services/upstream_request.rs
use serde::Serialize;

/// Session used when the caller does not name one.
pub const DEFAULT_SESSION_ID: &str = "user_1";

/// Body of the flow run call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpstreamRequest {
    pub input_value: String,
    pub output_type: &'static str,
    pub input_type: &'static str,
    pub session_id: String,
}

pub fn build(message: &str, session_id: Option<&str>) -> UpstreamRequest {
    UpstreamRequest {
        input_value: message.to_string(),
        output_type: "chat",
        input_type: "chat",
        session_id: session_id.unwrap_or(DEFAULT_SESSION_ID).to_string(),
    }
}
