//! Request authentication services.
//!
//! Two independent checks guard the API surface: a static key compared in
//! constant time, and an HMAC-SHA256 signature that binds a request to the
//! timestamp it was sent at. Handlers run one or both depending on the
//! endpoint's trust tier.

use thiserror::Error;

use crate::models::secrets::ApiKey;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::compare::constant_time_eq;
use crate::utils::hmac::hex_digest;

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Header carrying the Unix timestamp a signed request was issued at.
pub const TIMESTAMP_HEADER: &str = "X-Timestamp";

/// Header carrying the hex HMAC-SHA256 signature over [`TIMESTAMP_HEADER`].
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Maximum age (and forward skew) a signed timestamp may carry before the
/// signature is considered replayed.
pub const REPLAY_WINDOW_SECONDS: u64 = 30;

/// Why an API key check failed.
///
/// The distinction is for audit logging only; callers must collapse both
/// variants into the same client-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No key header was presented.
    #[error("missing API key")]
    Missing,
    /// A key was presented but does not match.
    #[error("invalid API key")]
    Invalid,
}

/// Why a signature check failed, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The timestamp header is absent or not an integer.
    #[error("malformed signature timestamp")]
    BadTimestamp,
    /// The presented signature does not match the expected digest.
    #[error("signature mismatch")]
    Mismatch,
    /// Signature and timestamp agree but fall outside the replay window.
    #[error("signature timestamp outside the replay window")]
    Expired,
}

/// Constant-time API key check.
pub struct RequestAuthenticator {
    api_key: ApiKey,
}

impl RequestAuthenticator {
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// Validate a presented key.
    ///
    /// The comparison runs even when no header was presented, so a missing
    /// key and a wrong key take the same time.
    pub fn authenticate(&self, presented: Option<&str>) -> Result<(), AuthError> {
        let candidate = presented.unwrap_or("");
        let matches = constant_time_eq(candidate.as_bytes(), self.api_key.as_bytes());

        match (presented, matches) {
            (_, true) => Ok(()),
            (None, false) => Err(AuthError::Missing),
            (Some(_), false) => Err(AuthError::Invalid),
        }
    }
}

/// Timestamp-bound HMAC signature check.
///
/// The signature covers the raw timestamp header string, so clients sign
/// exactly the bytes they send; the service never re-serializes the value
/// before verifying.
pub struct SignatureAuthenticator<C: Clock = SystemClock> {
    api_key: ApiKey,
    clock: C,
}

impl SignatureAuthenticator {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_clock(api_key, SystemClock)
    }
}

impl<C: Clock> SignatureAuthenticator<C> {
    pub fn with_clock(api_key: ApiKey, clock: C) -> Self {
        Self { api_key, clock }
    }

    /// Verify a (timestamp, signature) header pair against the clock.
    pub fn verify(&self, timestamp: Option<&str>, signature: Option<&str>) -> Result<(), SignatureError> {
        self.verify_at(timestamp, signature, self.clock.unix_now())
    }

    /// Clock-explicit verification.
    ///
    /// Checks run in a fixed order: parse the timestamp, compare the
    /// digest, then enforce the replay window. The digest comparison comes
    /// before the age check so a replayed-but-valid signature costs the
    /// same work as a fresh one. Missing headers degrade to empty strings
    /// and fall out of the corresponding step.
    pub fn verify_at(
        &self,
        timestamp: Option<&str>,
        signature: Option<&str>,
        now: u64,
    ) -> Result<(), SignatureError> {
        let raw_timestamp = timestamp.unwrap_or("");
        let presented = signature.unwrap_or("");

        let issued_at: i64 = raw_timestamp
            .trim()
            .parse()
            .map_err(|_| SignatureError::BadTimestamp)?;

        // Signed over the raw header bytes, not the parsed integer.
        let expected = hex_digest(self.api_key.as_bytes(), raw_timestamp.as_bytes());
        if !constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
            return Err(SignatureError::Mismatch);
        }

        if (now as i64).abs_diff(issued_at) > REPLAY_WINDOW_SECONDS {
            return Err(SignatureError::Expired);
        }

        Ok(())
    }
}
