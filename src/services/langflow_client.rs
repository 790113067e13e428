// src/services/langflow_client.rs
use std::fmt;

use bytes::Bytes;
use futures_util::{StreamExt, stream::BoxStream};
use reqwest::header;

use crate::config::Config;
use crate::error::TransportError;
use crate::services::normalizer::UpstreamResponse;
use crate::services::upstream_request::UpstreamRequest;

pub type ByteStream = BoxStream<'static, Result<Bytes, reqwest::Error>>;

/// How a successful upstream reply must be handled, decided from its content type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Streaming,
    Buffered,
}

pub fn classify(content_type: Option<&str>) -> ReplyKind {
    match content_type.map(str::to_ascii_lowercase) {
        Some(ct) if ct.contains("text/event-stream") || ct.contains("application/stream") => {
            ReplyKind::Streaming
        }
        _ => ReplyKind::Buffered,
    }
}

/// Unread upstream body plus the content type it was declared with.
pub struct StreamingReply {
    pub content_type: String,
    pub stream: ByteStream,
}

impl fmt::Debug for StreamingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingReply")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum UpstreamReply {
    Streaming(StreamingReply),
    Buffered(UpstreamResponse),
}

#[derive(Debug, Clone)]
pub struct LangflowClient {
    http: reqwest::Client,
    config: Config,
}

impl LangflowClient {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    /// Run the configured flow once. No retries.
    pub async fn send(&self, request: &UpstreamRequest) -> Result<UpstreamReply, TransportError> {
        let url = self.config.run_url();
        tracing::info!(session_id = %request.session_id, "dispatching to Langflow");

        let limit = self.config.response_timeout;
        let pending = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_token)
            .json(request)
            .send();
        let response = tokio::time::timeout(limit, pending)
            .await
            .map_err(|_| TransportError::TimedOut(limit))??;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let kind = classify(content_type.as_deref());
        tracing::debug!(?kind, content_type = ?content_type, "classified upstream reply");

        match kind {
            ReplyKind::Streaming => Ok(UpstreamReply::Streaming(StreamingReply {
                content_type: content_type.unwrap_or_default(),
                stream: response.bytes_stream().boxed(),
            })),
            ReplyKind::Buffered => {
                // Streams are exempt; only the buffered body read is bounded.
                let value = tokio::time::timeout(limit, response.json::<serde_json::Value>())
                    .await
                    .map_err(|_| TransportError::TimedOut(limit))??;
                Ok(UpstreamReply::Buffered(UpstreamResponse::new(value)))
            }
        }
    }
}
