// src/config.rs
use std::{fmt, net::SocketAddr, time::Duration};

use thiserror::Error;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8000);
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_RESPONSE_TIMEOUT_SECS: u64 = 120;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("invalid value '{value}' for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Process-wide settings, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub api_token: String,
    pub base_url: String,
    pub flow_id: String,
    pub endpoint_id: String,
    pub bind_addr: SocketAddr,
    pub connect_timeout: Duration,
    /// Bound on waiting for reply headers and on reading a buffered body.
    pub response_timeout: Duration,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("flow_id", &self.flow_id)
            .field("endpoint_id", &self.endpoint_id)
            .field("bind_addr", &self.bind_addr)
            .field("connect_timeout", &self.connect_timeout)
            .field("response_timeout", &self.response_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let api_token = require("LANGFLOW_API_TOKEN")?;
        let base_url = require("LANGFLOW_BASE_URL")?
            .trim_end_matches('/')
            .to_string();
        let flow_id = require("LANGFLOW_FLOW_ID")?;
        let endpoint_id = require("LANGFLOW_ENDPOINT_ID")?;

        let bind_addr = match get("BIND_ADDR") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "BIND_ADDR",
                value: raw.clone(),
            })?,
            None => SocketAddr::from(DEFAULT_BIND_ADDR),
        };

        let seconds = |var: &'static str, default: u64| match get(var) {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Invalid { var, value: raw }),
            None => Ok(Duration::from_secs(default)),
        };
        let connect_timeout =
            seconds("LANGFLOW_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?;
        let response_timeout =
            seconds("LANGFLOW_RESPONSE_TIMEOUT_SECS", DEFAULT_RESPONSE_TIMEOUT_SECS)?;

        Ok(Self {
            api_token,
            base_url,
            flow_id,
            endpoint_id,
            bind_addr,
            connect_timeout,
            response_timeout,
        })
    }

    /// Flow execution endpoint on the upstream.
    pub fn run_url(&self) -> String {
        format!(
            "{}/lf/{}/api/v1/run/{}",
            self.base_url, self.endpoint_id, self.flow_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 4] = [
        ("LANGFLOW_API_TOKEN", "secret"),
        ("LANGFLOW_BASE_URL", "https://langflow.example.com/"),
        ("LANGFLOW_FLOW_ID", "flow-1"),
        ("LANGFLOW_ENDPOINT_ID", "ep-9"),
    ];

    #[test]
    fn loads_required_values_and_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.base_url, "https://langflow.example.com");
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.response_timeout, Duration::from_secs(120));
        assert_eq!(
            config.run_url(),
            "https://langflow.example.com/lf/ep-9/api/v1/run/flow-1"
        );
    }

    #[test]
    fn missing_token_is_rejected() {
        let err = Config::from_lookup(lookup(&REQUIRED[1..])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("LANGFLOW_API_TOKEN"));
    }

    #[test]
    fn blank_token_counts_as_missing() {
        let mut pairs = REQUIRED.to_vec();
        pairs[0] = ("LANGFLOW_API_TOKEN", "   ");
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert_eq!(err, ConfigError::Missing("LANGFLOW_API_TOKEN"));
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("BIND_ADDR", "not-an-addr"));
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
    }

    #[test]
    fn response_timeout_is_configurable() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("LANGFLOW_RESPONSE_TIMEOUT_SECS", "5"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.response_timeout, Duration::from_secs(5));

        pairs.push(("LANGFLOW_CONNECT_TIMEOUT_SECS", "soon"));
        let err = Config::from_lookup(lookup(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { var: "LANGFLOW_CONNECT_TIMEOUT_SECS", .. }
        ));
    }

    #[test]
    fn debug_hides_token() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert!(!format!("{config:?}").contains("secret"));
    }
}
