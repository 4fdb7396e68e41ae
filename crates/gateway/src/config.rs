//! Gateway configuration.

use std::env;

use common::ServiceConfig;
use user_service_lib::config::UserServiceConfig;

/// Default mount point for every API route
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address, service name and log level
    pub server: ServiceConfig,
    /// Path prefix for API routes (empty mounts at the root)
    pub api_prefix: String,
    /// Attach a permissive CORS layer
    pub cors_permissive: bool,
    /// Settings forwarded to the embedded user service
    pub users: UserServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env("GATEWAY"),
            api_prefix: normalize_prefix(
                &env::var("API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            ),
            cors_permissive: env::var("CORS_PERMISSIVE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            users: UserServiceConfig::from_env(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "gateway".to_string(),
                ..ServiceConfig::default()
            },
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_permissive: true,
            users: UserServiceConfig::default(),
        }
    }
}

/// Ensure a leading slash and drop trailing ones; `/` becomes empty.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/api/"), "/api");
        assert_eq!(normalize_prefix("/v1/api"), "/v1/api");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }
}
