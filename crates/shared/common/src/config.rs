//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables, using `prefix` for
    /// service-specific keys (e.g. `GATEWAY` reads `GATEWAY_HOST`).
    pub fn from_env(prefix: &str) -> Self {
        let defaults = Self::default();
        Self {
            service_name: env::var(format!("{prefix}_SERVICE_NAME"))
                .unwrap_or_else(|_| prefix.to_lowercase()),
            host: env::var(format!("{prefix}_HOST")).unwrap_or(defaults.host),
            port: env::var(format!("{prefix}_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        }
    }

    /// `host:port` string suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info,tower_http=debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..ServiceConfig::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn unset_prefix_falls_back_to_defaults() {
        let config = ServiceConfig::from_env("COMMON_TEST_UNSET_PREFIX");
        assert_eq!(config.service_name, "common_test_unset_prefix");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }
}
