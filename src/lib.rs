//! Keyfob API - a TOTP microservice for scripted 2FA flows
//!
//! This service issues and verifies time-based one-time passwords behind
//! a dual-layer request authenticator:
//! - RFC 6238 TOTP generation with clock-drift-tolerant verification
//! - Constant-time API key checks
//! - Timestamp-bound HMAC-SHA256 request signatures with a replay window
//! - Prometheus metrics integration
//! - Structured audit logging
//! - OpenAPI documentation
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures, request/response models, secret newtypes
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - OTP engine, authenticators, and metrics
//! - `utils/` - Clock, constant-time comparison, and HMAC helpers
//! - `config/` - Configuration structures and environment loading
//! - `error` - Error-kind to HTTP response mapping
//!
//! ## Quick Start
//!
//! ```no_run
//! use keyfob_api::{create_app, AppConfig, AppMetrics};
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let config = AppConfig::from_env().expect("configuration");
//!     let metrics = AppMetrics::new().expect("metrics registry");
//!     let app = create_app(&config, &metrics);
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types and functions for convenience
pub use config::{AppConfig, ConfigError, MetricsConfig, SecretsConfig, ServerConfig};
pub use error::ApiError;
pub use handlers::{
    create_app, create_openapi_spec, get_metrics, get_otp, get_otp_secure, health, verify_otp,
    version,
};
pub use middleware::{MetricsMiddleware, RequestId, RequestIdMiddleware};
pub use models::{
    ApiKey, AuthAuditEvent, AuthEventOutcome, AuthEventType, ErrorResponse, HealthResponse,
    InvalidSecret, OtpResponse, OtpSecret, VerifyRequest, VerifyResponse, VersionResponse,
};
pub use services::{
    AppMetrics, AuthError, RequestAuthenticator, SignatureAuthenticator, SignatureError,
    TotpEngine, REPLAY_WINDOW_SECONDS, TIME_STEP_SECONDS, VERIFY_WINDOW,
};
pub use utils::{
    Clock, FixedClock, SystemClock, constant_time_eq, extract_client_ip, extract_route_pattern,
    extract_user_agent, sign_timestamp,
};

// Additional re-exports for middleware composition in tests
pub use middleware::{MetricsService, RequestIdService};
