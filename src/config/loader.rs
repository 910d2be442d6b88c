//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_API_KEY: &str = "RAPID_API_KEY";
pub const ENV_API_HOST: &str = "RAPID_API_HOST";
pub const ENV_PORT: &str = "PORT";
pub const ENV_BASE_URL: &str = "UPSTREAM_BASE_URL";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {name}: {value}")]
    Env { name: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse configuration from a TOML file without validating it.
pub fn read_config_file(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Overlay environment variables on top of `config`.
///
/// `lookup` abstracts `std::env::var` so tests can inject values.
pub fn apply_env_overrides<F>(config: &mut GatewayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup(ENV_API_KEY) {
        config.upstream.api_key = key;
    }
    if let Some(host) = lookup(ENV_API_HOST) {
        config.upstream.api_host = host;
    }
    if let Some(base_url) = lookup(ENV_BASE_URL) {
        config.upstream.base_url = base_url;
    }
    if let Some(level) = lookup(ENV_LOG_LEVEL) {
        config.observability.log_level = level;
    }
    if let Some(port) = lookup(ENV_PORT) {
        let port: u16 = port.trim().parse().map_err(|_| ConfigError::Env {
            name: ENV_PORT,
            value: port.clone(),
        })?;
        config.listener.bind_address = format!("0.0.0.0:{}", port);
    }
    Ok(())
}

/// Build the runtime configuration: defaults, then the optional TOML file,
/// then the process environment. The result is validated.
pub fn load_config(path: Option<&Path>) -> Result<GatewayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => GatewayConfig::default(),
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_env_overrides_credentials_and_port() {
        let mut config = GatewayConfig::default();
        apply_env_overrides(
            &mut config,
            lookup_from(&[
                (ENV_API_KEY, "abc"),
                (ENV_API_HOST, "example.p.rapidapi.com"),
                (ENV_PORT, "3001"),
            ]),
        )
        .unwrap();

        assert_eq!(config.upstream.api_key, "abc");
        assert_eq!(config.upstream.api_host, "example.p.rapidapi.com");
        assert_eq!(config.listener.bind_address, "0.0.0.0:3001");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut config = GatewayConfig::default();
        let err = apply_env_overrides(&mut config, lookup_from(&[(ENV_PORT, "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { name: ENV_PORT, .. }));
    }

    #[test]
    fn test_missing_env_leaves_defaults() {
        let mut config = GatewayConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert!(config.upstream.api_key.is_empty());
    }

    #[test]
    fn test_validation_error_display_lists_everything() {
        let err = ConfigError::Validation(vec![
            ValidationError::MissingApiKey,
            ValidationError::MissingApiHost,
        ]);
        let message = err.to_string();
        assert!(message.contains("api_key"));
        assert!(message.contains("api_host"));
    }
}
