//! API request/response models for the OTP endpoints.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Response model for the health check endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct HealthResponse {
    pub status: String,
    /// Unix timestamp of the probe
    pub timestamp: u64,
}

/// Response model for OTP issuance (`GET /otp`, `GET /otp/secure`)
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct OtpResponse {
    /// Current 6-digit code
    pub otp: String,
    /// Seconds until the code rolls over, always 1..=30
    pub valid_for_seconds: u64,
    /// Unix timestamp the code was issued at
    pub timestamp: u64,
}

/// Request model for OTP verification
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VerifyRequest {
    pub otp: String,
}

/// Response model for OTP verification
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VerifyResponse {
    pub valid: bool,
    /// Unix timestamp the check ran at
    pub timestamp: u64,
}

/// Response model for the version information endpoint
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct VersionResponse {
    pub version: String,
    pub commit: String,
    pub build_time: String,
}

/// Error body returned by every failing endpoint; never carries internal
/// detail or secret material.
#[derive(Clone, Serialize, Deserialize, Apiv2Schema)]
pub struct ErrorResponse {
    pub error: String,
}
