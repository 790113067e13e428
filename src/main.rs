use std::sync::Arc;

use anyhow::Context;
use chat_gateway::{config::Config, routes, state::AppState, telemetry};
use tower_http::cors::CorsLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    telemetry::init();
    if let Err(e) = dotenv {
        tracing::warn!("Could not load .env file: {}", e);
    }

    let config = Config::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    let bind_addr = config.bind_addr;
    let state = Arc::new(AppState::new(config).context("failed to build HTTP client")?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("chat gateway listening on http://{}", bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
