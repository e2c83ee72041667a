//! Configuration structures and loading utilities.
//!
//! This module contains all configuration structures used by the
//! application, including environment variable loading and the startup
//! validation that refuses to serve traffic on an incomplete environment.

pub mod metrics;
pub mod secrets;
pub mod server;

pub use metrics::*;
pub use secrets::*;
pub use server::*;

use thiserror::Error;

use crate::models::secrets::InvalidSecret;

/// Fatal startup configuration failures.
///
/// Any of these stops the process before it serves traffic; none of them
/// ever carries secret material in its message.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
    #[error("OTP_SECRET is not a valid base32-encoded TOTP secret: {0}")]
    Secret(#[from] InvalidSecret),
    #[error("PORT is not a valid TCP port: {0:?}")]
    InvalidPort(String),
}

impl ConfigError {
    pub(crate) fn missing(names: Vec<&str>) -> Self {
        Self::MissingVars(names.into_iter().map(String::from).collect())
    }
}

/// Everything the process needs, resolved once at startup and handed by
/// reference into the app factory. No component reads the environment
/// after this point.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub secrets: SecretsConfig,
    pub metrics: MetricsConfig,
}

impl AppConfig {
    /// Resolve the full configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            secrets: SecretsConfig::from_env()?,
            metrics: MetricsConfig::from_env(),
        })
    }
}
