// src/services/mod.rs
pub mod langflow_client;
pub mod normalizer;
pub mod upstream_request;
