//! Time-based one-time password engine.
//!
//! RFC 6238 TOTP over RFC 4226 HOTP: the Unix time is partitioned into
//! 30-second steps and each step's counter is run through HMAC-SHA1 with
//! dynamic truncation to a zero-padded 6-digit code.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::models::api::{OtpResponse, VerifyResponse};
use crate::models::secrets::OtpSecret;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::compare::constant_time_eq;

type HmacSha1 = Hmac<Sha1>;

/// Length of one time step, in seconds.
pub const TIME_STEP_SECONDS: u64 = 30;

/// Digits in a generated code.
pub const CODE_DIGITS: usize = 6;

/// Steps checked on either side of the current one during verification,
/// tolerating one step of clock drift in each direction (90 seconds of
/// acceptance in total).
pub const VERIFY_WINDOW: u64 = 1;

/// Generates and verifies codes for the configured shared secret.
///
/// The engine is a pure function of (secret, clock): it holds no mutable
/// state and may be shared freely across workers.
pub struct TotpEngine<C: Clock = SystemClock> {
    secret: OtpSecret,
    clock: C,
}

impl TotpEngine {
    /// Engine over the system wall clock.
    pub fn new(secret: OtpSecret) -> Self {
        Self::with_clock(secret, SystemClock)
    }
}

impl<C: Clock> TotpEngine<C> {
    /// Engine over an injected clock, for tests that pin time.
    pub fn with_clock(secret: OtpSecret, clock: C) -> Self {
        Self { secret, clock }
    }

    /// Current code plus how long it remains valid.
    ///
    /// Reads the clock exactly once so the code and its remaining
    /// lifetime always describe the same instant, even at a step boundary.
    pub fn issue(&self) -> OtpResponse {
        let now = self.clock.unix_now();
        OtpResponse {
            otp: self.generate_at(now),
            valid_for_seconds: self.remaining_seconds_at(now),
            timestamp: now,
        }
    }

    /// Check a candidate against the current verification window.
    pub fn verify(&self, candidate: &str) -> VerifyResponse {
        let now = self.clock.unix_now();
        VerifyResponse {
            valid: self.verify_at(candidate, now),
            timestamp: now,
        }
    }

    /// Code for the time step containing `now`.
    pub fn generate_at(&self, now: u64) -> String {
        hotp(self.secret.as_bytes(), now / TIME_STEP_SECONDS)
    }

    /// Seconds left in the current step; always in 1..=30.
    pub fn remaining_seconds_at(&self, now: u64) -> u64 {
        TIME_STEP_SECONDS - (now % TIME_STEP_SECONDS)
    }

    /// Whether `candidate` matches any code within ±[`VERIFY_WINDOW`]
    /// steps of `now`.
    pub fn verify_at(&self, candidate: &str, now: u64) -> bool {
        self.verify_with_window(candidate, now, VERIFY_WINDOW)
    }

    /// Window-parameterized verification.
    ///
    /// Every code in the window is computed and compared; matches
    /// accumulate instead of short-circuiting, and a malformed candidate
    /// is an ordinary non-match rather than an error, so neither the
    /// matching step nor the input format shows up as a latency or
    /// response difference.
    pub fn verify_with_window(&self, candidate: &str, now: u64, window: u64) -> bool {
        let current = now / TIME_STEP_SECONDS;
        let mut matched = false;

        for counter in current.saturating_sub(window)..=current.saturating_add(window) {
            let expected = hotp(self.secret.as_bytes(), counter);
            matched |= constant_time_eq(candidate.as_bytes(), expected.as_bytes());
        }

        matched
    }
}

/// RFC 4226 HOTP: HMAC-SHA1 over the big-endian counter, truncated at the
/// offset named by the digest's low nibble, masked to 31 bits, reduced
/// mod 10^6, and zero-padded.
fn hotp(secret: &[u8], counter: u64) -> String {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha1::new_from_slice(secret).expect("HMAC accepts keys of any length");
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = (u32::from(digest[offset] & 0x7f) << 24)
        | (u32::from(digest[offset + 1]) << 16)
        | (u32::from(digest[offset + 2]) << 8)
        | u32::from(digest[offset + 3]);

    let code = binary % 10u32.pow(CODE_DIGITS as u32);
    format!("{code:0width$}", width = CODE_DIGITS)
}
