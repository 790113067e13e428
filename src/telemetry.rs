// src/telemetry.rs
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info";

/// Filter from `RUST_LOG`, or `info` when unset or unparsable.
pub fn log_filter() -> EnvFilter {
    filter_from(std::env::var("RUST_LOG").ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the fmt subscriber. Call after `.env` is loaded so `RUST_LOG` from it applies.
pub fn init() {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();
}
