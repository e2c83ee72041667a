//! HTTP server bind configuration.

use std::env;

use crate::config::ConfigError;

/// Bind address for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// A `PORT` that does not parse as a TCP port is a startup error, not a
    /// silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => defaults.port,
        };

        Ok(Self { host, port })
    }
}
