//! HMAC-SHA256 digest helpers shared by the signature layer and client tooling.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex HMAC-SHA256 digest of `message` under `key`.
pub fn hex_digest(key: &[u8], message: &[u8]) -> String {
    // HMAC accepts keys of any length, so construction cannot fail.
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Signature a caller presents for a given `X-Timestamp` header value.
///
/// The message is the header string exactly as sent; the service verifies
/// against the same raw bytes, never a re-serialized form.
pub fn sign_timestamp(api_key: &str, timestamp: &str) -> String {
    hex_digest(api_key.as_bytes(), timestamp.as_bytes())
}
