//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the exercise gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream exercise API settings.
    pub upstream: UpstreamConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream exercise database API configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every upstream path is appended to.
    pub base_url: String,

    /// Value of the `x-rapidapi-key` header.
    pub api_key: String,

    /// Value of the `x-rapidapi-host` header.
    pub api_host: String,

    /// Timeout for listing, search and detail calls in seconds.
    pub metadata_timeout_secs: u64,

    /// Timeout for video calls in seconds. Video payloads can be large.
    pub video_timeout_secs: u64,
}

impl UpstreamConfig {
    pub fn metadata_timeout(&self) -> Duration {
        Duration::from_secs(self.metadata_timeout_secs)
    }

    pub fn video_timeout(&self) -> Duration {
        Duration::from_secs(self.video_timeout_secs)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://musclewiki-api.p.rapidapi.com".to_string(),
            api_key: String::new(),
            api_host: "musclewiki-api.p.rapidapi.com".to_string(),
            metadata_timeout_secs: 10,
            video_timeout_secs: 60,
        }
    }
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("metadata_timeout_secs", &self.metadata_timeout_secs)
            .field("video_timeout_secs", &self.video_timeout_secs)
            .finish()
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_upstream_timeouts() {
        let config = GatewayConfig::default();
        assert_eq!(config.upstream.metadata_timeout(), Duration::from_secs(10));
        assert_eq!(config.upstream.video_timeout(), Duration::from_secs(60));
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
            [upstream]
            api_key = "secret"
            "#,
        )
        .unwrap();

        assert_eq!(config.upstream.api_key, "secret");
        assert_eq!(config.upstream.video_timeout_secs, 60);
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = UpstreamConfig::default();
        config.api_key = "super-secret".into();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
