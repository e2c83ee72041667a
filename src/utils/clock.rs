//! Injectable time source.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current Unix time, in whole seconds.
///
/// The OTP engine and the signature authenticator read the clock fresh on
/// every call so step boundaries and replay windows are judged against the
/// true current instant; tests substitute [`FixedClock`] to pin a moment.
pub trait Clock {
    /// Seconds since the Unix epoch.
    fn unix_now(&self) -> u64;
}

/// Wall clock backed by [`SystemTime`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_now(&self) -> u64 {
        // A system clock set before 1970 yields zero rather than a panic;
        // every generated code is wrong either way until the operator
        // fixes the clock.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }
}

/// Clock pinned to one instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn unix_now(&self) -> u64 {
        self.0
    }
}
