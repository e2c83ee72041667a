//! Secret configuration loaded once at startup.

use std::env;

use crate::config::ConfigError;
use crate::models::secrets::{ApiKey, OtpSecret};

/// Secrets every deployment must provide.
///
/// Loading fails when either value is absent, empty, or undecodable;
/// there are no defaults.
#[derive(Debug, Clone)]
pub struct SecretsConfig {
    pub api_key: ApiKey,
    pub otp_secret: OtpSecret,
}

impl SecretsConfig {
    /// Load and validate `API_KEY` and `OTP_SECRET`.
    ///
    /// Missing variables are collected and reported together in one error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("API_KEY").ok().and_then(ApiKey::new);
        let otp_secret = env::var("OTP_SECRET").ok().filter(|v| !v.is_empty());

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push("API_KEY");
        }
        if otp_secret.is_none() {
            missing.push("OTP_SECRET");
        }

        match (api_key, otp_secret) {
            (Some(api_key), Some(encoded)) => Ok(Self {
                api_key,
                otp_secret: OtpSecret::parse(&encoded)?,
            }),
            _ => Err(ConfigError::missing(missing)),
        }
    }
}
