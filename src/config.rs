//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;

use thiserror::Error;

/// Default upstream search endpoint.
pub const DEFAULT_JISHO_API_URL: &str = "https://jisho.org/api/v1/search/words";

/// A required setting is absent or unusable.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Network location of the key-value store
    pub redis_url: String,
    /// Access token for the key-value store
    pub redis_token: String,
    /// Upstream dictionary search endpoint
    pub jisho_api_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `REDIS_URL` - store location (required)
    /// - `REDIS_TOKEN` - store access token (required)
    /// - `JISHO_API_URL` - upstream endpoint (default: jisho.org)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let required = |name: &'static str| {
            var(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let server_port = match var("SERVER_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                value,
            })?,
            None => 3000,
        };

        Ok(Self {
            server_port,
            redis_url: required("REDIS_URL")?,
            redis_token: required("REDIS_TOKEN")?,
            jisho_api_url: var("JISHO_API_URL")
                .unwrap_or_else(|| DEFAULT_JISHO_API_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(source(&[
            ("REDIS_URL", "rediss://example.upstash.io:6379"),
            ("REDIS_TOKEN", "secret"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.jisho_api_url, DEFAULT_JISHO_API_URL);
        assert_eq!(config.redis_token, "secret");
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(source(&[
            ("REDIS_URL", "redis://127.0.0.1:6379"),
            ("REDIS_TOKEN", "secret"),
            ("SERVER_PORT", "8080"),
            ("JISHO_API_URL", "http://127.0.0.1:9000/words"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.jisho_api_url, "http://127.0.0.1:9000/words");
    }

    #[test]
    fn test_config_missing_redis_url() {
        let result = Config::from_lookup(source(&[("REDIS_TOKEN", "secret")]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("REDIS_URL"));
    }

    #[test]
    fn test_config_empty_token_is_missing() {
        let result = Config::from_lookup(source(&[
            ("REDIS_URL", "redis://127.0.0.1:6379"),
            ("REDIS_TOKEN", ""),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::Missing("REDIS_TOKEN"));
    }

    #[test]
    fn test_config_invalid_port() {
        let result = Config::from_lookup(source(&[
            ("REDIS_URL", "redis://127.0.0.1:6379"),
            ("REDIS_TOKEN", "secret"),
            ("SERVER_PORT", "http"),
        ]));
        assert!(matches!(result, Err(ConfigError::Invalid { name: "SERVER_PORT", .. })));
    }
}
