#!/usr/bin/env cargo
//! Request Signing Demo
//!
//! This example demonstrates how to produce the `X-Timestamp` and
//! `X-Signature` headers that the `/otp/secure` endpoint requires. Run with:
//!
//! ```
//! cargo run --example sign_request
//! ```

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacSha256 = Hmac<Sha256>;

/// Generate the HMAC-SHA256 signature over the exact timestamp string
fn generate_signature(api_key: &str, timestamp: &str) -> Result<String, String> {
    let mut mac = HmacSha256::new_from_slice(api_key.as_bytes())
        .map_err(|e| format!("Invalid API key: {e}"))?;

    mac.update(timestamp.as_bytes());

    let result = mac.finalize();
    Ok(hex::encode(result.into_bytes()))
}

fn main() {
    println!("🔐 Keyfob API Request Signing Demo");
    println!("===================================\n");

    // Demo configuration
    let api_key = std::env::var("API_KEY").unwrap_or_else(|_| "my-api-key".to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
        .to_string();

    println!("Configuration:");
    println!("  API key: {api_key}");
    println!("  Timestamp: {timestamp}");

    // Generate signature over the timestamp string, byte-for-byte
    match generate_signature(&api_key, &timestamp) {
        Ok(signature) => {
            println!("\n✅ Generated Headers:");
            println!("  X-API-Key: {api_key}");
            println!("  X-Timestamp: {timestamp}");
            println!("  X-Signature: {signature}");

            println!("\n📋 Example curl command:");
            println!("curl -H 'X-API-Key: {api_key}' \\");
            println!("     -H 'X-Timestamp: {timestamp}' \\");
            println!("     -H 'X-Signature: {signature}' \\");
            println!("     http://localhost:8000/otp/secure");

            println!("\n🔍 Message for signature (the raw X-Timestamp value):");
            println!("  '{timestamp}'");

            println!("\n⏱️  The server rejects timestamps more than 30 seconds from");
            println!("   its own clock, so send the request promptly after signing.");
        }
        Err(e) => {
            println!("❌ Error generating signature: {e}");
        }
    }
}
