//! Secret material newtypes.
//!
//! Both values are process-wide immutable configuration: constructed once
//! during startup validation and handed by ownership to the authenticator
//! constructors. `Debug` is implemented by hand on each so the underlying
//! bytes cannot reach a log line through formatting.

use base32::Alphabet;
use std::fmt;
use thiserror::Error;

/// Reasons an OTP secret is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSecret {
    #[error("not valid base32")]
    NotBase32,
    #[error("decodes to zero bytes")]
    Empty,
}

/// Shared TOTP secret, held as the decoded key bytes.
#[derive(Clone)]
pub struct OtpSecret(Vec<u8>);

impl OtpSecret {
    /// Parse a base32-encoded secret.
    ///
    /// Accepts the forms authenticator tooling hands around: mixed case,
    /// embedded spaces, and optional `=` padding are all tolerated before
    /// the RFC 4648 decode.
    pub fn parse(encoded: &str) -> Result<Self, InvalidSecret> {
        let normalized: String = encoded
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        let normalized = normalized.trim_end_matches('=');

        let bytes = base32::decode(Alphabet::Rfc4648 { padding: false }, normalized)
            .ok_or(InvalidSecret::NotBase32)?;
        if bytes.is_empty() {
            return Err(InvalidSecret::Empty);
        }
        Ok(Self(bytes))
    }

    /// Decoded key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for OtpSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpSecret(<redacted>)")
    }
}

/// Static API key callers present in `X-API-Key`.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, rejecting the empty string.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_base32() {
        let secret = OtpSecret::parse("JBSWY3DPEHPK3PXP").unwrap();
        assert_eq!(secret.as_bytes().len(), 10);
    }

    #[test]
    fn normalizes_case_whitespace_and_padding() {
        let canonical = OtpSecret::parse("MFRGG").unwrap();
        assert_eq!(canonical.as_bytes(), b"abc");
        assert_eq!(OtpSecret::parse("mfrgg").unwrap().as_bytes(), b"abc");
        assert_eq!(OtpSecret::parse(" MF RGG ").unwrap().as_bytes(), b"abc");
        assert_eq!(OtpSecret::parse("MFRGG===").unwrap().as_bytes(), b"abc");
    }

    #[test]
    fn rejects_non_base32_input() {
        assert!(matches!(
            OtpSecret::parse("not-base32!"),
            Err(InvalidSecret::NotBase32)
        ));
        assert!(matches!(
            OtpSecret::parse("189"),
            Err(InvalidSecret::NotBase32)
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(OtpSecret::parse(""), Err(InvalidSecret::Empty)));
        assert!(matches!(OtpSecret::parse("===="), Err(InvalidSecret::Empty)));
    }

    #[test]
    fn debug_output_is_redacted() {
        let secret = OtpSecret::parse("JBSWY3DPEHPK3PXP").unwrap();
        let key = ApiKey::new("super-secret-key").unwrap();
        assert_eq!(format!("{secret:?}"), "OtpSecret(<redacted>)");
        assert_eq!(format!("{key:?}"), "ApiKey(<redacted>)");
        assert!(!format!("{key:?}").contains("super-secret-key"));
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(ApiKey::new("").is_none());
        assert!(ApiKey::new("k").is_some());
    }
}
