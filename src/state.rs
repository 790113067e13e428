// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::error::TransportError;
use crate::services::langflow_client::LangflowClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub client: LangflowClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        Ok(Self {
            client: LangflowClient::new(config)?,
        })
    }
}
