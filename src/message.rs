// src/message.rs
use serde::{Deserialize, Serialize};

/// Inbound `POST /chat` body.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub msg: String,
}

/// Query string of `POST /chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatQuery {
    #[serde(rename = "chatId")]
    pub chat_id: Option<String>,
}

impl ChatQuery {
    /// The caller's session id, if one was actually given.
    pub fn session_id(&self) -> Option<&str> {
        self.chat_id
            .as_deref()
            .filter(|s| !s.is_empty())
    }
}

/// Reply shape when the caller asked for a single message.
#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizedResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
