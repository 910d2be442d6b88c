//! Configuration validation.
//!
//! Semantic checks that serde cannot express. All problems are collected
//! so a misconfigured deployment reports everything in one go.

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{0}' is not an absolute http(s) URL")]
    BaseUrl(String),

    #[error("upstream.api_key is empty (set RAPID_API_KEY)")]
    MissingApiKey,

    #[error("upstream.api_host is empty (set RAPID_API_HOST)")]
    MissingApiHost,

    #[error("upstream.{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    MetricsAddress(String),
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::BaseUrl(upstream.base_url.clone())),
    }

    if upstream.api_key.trim().is_empty() {
        errors.push(ValidationError::MissingApiKey);
    }
    if upstream.api_host.trim().is_empty() {
        errors.push(ValidationError::MissingApiHost);
    }
    if upstream.metadata_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("metadata_timeout_secs"));
    }
    if upstream.video_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("video_timeout_secs"));
    }

    let observability = &config.observability;
    if observability.metrics_enabled
        && observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.upstream.api_key = "key".into();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_reports_all_errors() {
        let mut config = valid_config();
        config.upstream.api_key = String::new();
        config.upstream.api_host = "  ".into();
        config.upstream.base_url = "not a url".into();
        config.upstream.video_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::MissingApiKey));
        assert!(errors.contains(&ValidationError::MissingApiHost));
        assert!(errors.contains(&ValidationError::ZeroTimeout("video_timeout_secs")));
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = valid_config();
        config.upstream.base_url = "ftp://example.com".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::BaseUrl("ftp://example.com".into())]
        );
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = valid_config();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
