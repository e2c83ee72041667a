//! Business logic and service layer modules.
//!
//! This module contains the core business logic of the application,
//! including OTP generation, request authentication, and metrics collection.

pub mod auth;
pub mod metrics;
pub mod totp;

pub use auth::*;
pub use metrics::*;
pub use totp::*;
