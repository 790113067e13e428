use axum::{
    Json,
    body::Body,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use futures_util::TryStreamExt;

use crate::{
    error::AppError,
    message::{ChatQuery, ChatRequest, HealthResponse, NormalizedResponse},
    services::{
        langflow_client::{StreamingReply, UpstreamReply},
        normalizer, upstream_request,
    },
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    query: Result<Query<ChatQuery>, QueryRejection>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query.map_err(|e| AppError::bad_request(e.body_text()))?;
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    if payload.msg.is_empty() {
        return Err(AppError::bad_request(
            "The request body must contain a valid \"msg\" field",
        ));
    }

    let session_id = query.session_id();
    let request = upstream_request::build(&payload.msg, session_id);

    match state.client.send(&request).await? {
        UpstreamReply::Streaming(reply) => {
            if session_id.is_some() {
                // Normalization only exists for buffered replies.
                tracing::warn!(
                    content_type = %reply.content_type,
                    "chatId given but upstream is streaming; relaying unnormalized"
                );
            }
            Ok(relay(reply))
        }
        UpstreamReply::Buffered(response) => {
            if session_id.is_none() {
                return Ok(Json(response.into_value()).into_response());
            }
            let message = normalizer::extract(&response);
            let session_id = response.session_id().map(str::to_string);
            Ok(Json(NormalizedResponse {
                message,
                session_id,
            })
            .into_response())
        }
    }
}

/// Forward the upstream body chunk by chunk. Dropping the body closes the upstream connection.
fn relay(reply: StreamingReply) -> Response {
    let stream = reply
        .stream
        .inspect_err(|e| tracing::error!("stream relay aborted: {}", e));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, reply.content_type)
        .header(header::CACHE_CONTROL, "no-cache")
        .header(header::CONNECTION, "keep-alive")
        .body(Body::from_stream(stream))
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Hello Hono!".to_string(),
    })
}
