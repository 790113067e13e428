// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;

/// Failure talking to the upstream flow API.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("upstream returned {status} {status_text}")]
    Rejected { status: u16, status_text: String },

    #[error("upstream did not answer within {0:?}")]
    TimedOut(std::time::Duration),

    #[error(transparent)]
    Failed(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("bad request: {message}")]
    BadRequest { message: String },

    #[error("external API error: {status} {status_text}")]
    UpstreamRejected { status: u16, status_text: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::UpstreamRejected { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TransportError> for AppError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Rejected {
                status,
                status_text,
            } => AppError::UpstreamRejected {
                status,
                status_text,
            },
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = match &self {
            AppError::BadRequest { message } => {
                tracing::warn!("rejected chat request: {}", message);
                ErrorResponse {
                    error: "Missing or invalid \"msg\" field in request body".to_string(),
                    message: Some(message.clone()),
                    status: None,
                }
            }
            AppError::UpstreamRejected {
                status,
                status_text,
            } => {
                tracing::error!("Langflow API error: {} {}", status, status_text);
                ErrorResponse {
                    error: "External API error".to_string(),
                    message: None,
                    status: Some(*status),
                }
            }
            AppError::Internal(message) => {
                tracing::error!("chat endpoint error: {}", message);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    message: Some(message.clone()),
                    status: None,
                }
            }
        };

        (self.status_code(), Json(body)).into_response()
    }
}
