use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SERVICE_NAME: &str = "recipeshare-server";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

/// Server settings, read once at startup.
///
/// Environment variables:
/// - BIND_ADDR: listen address (default 0.0.0.0:3000)
/// - OTEL_EXPORTER_OTLP_ENDPOINT: OTLP collector; console logging only when unset
/// - OTEL_SERVICE_NAME: service name reported to the collector
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            otlp_endpoint: get("OTEL_EXPORTER_OTLP_ENDPOINT"),
            service_name: get("OTEL_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        })
    }
}
