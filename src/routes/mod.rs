// src/routes/mod.rs
pub mod chat;
pub mod docs;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, health_handler};
use docs::{docs_redirect, openapi_handler, swagger_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/swagger", get(swagger_handler))
        .route("/docs", get(docs_redirect))
        .layer(TraceLayer::new_for_http())
}
