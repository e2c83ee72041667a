use actix_web::{http::StatusCode, test};
use std::time::{SystemTime, UNIX_EPOCH};

use keyfob_api::{
    ApiKey, AppConfig, AppMetrics, MetricsConfig, OtpSecret, SecretsConfig, ServerConfig,
    create_app, sign_timestamp,
};

const TEST_SECRET: &str = "JBSWY3DPEHPK3PXP";
const TEST_API_KEY: &str = "test-api-key";

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        secrets: SecretsConfig {
            api_key: ApiKey::new(TEST_API_KEY).unwrap(),
            otp_secret: OtpSecret::parse(TEST_SECRET).unwrap(),
        },
        metrics: MetricsConfig::default(),
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Integration test for API key enforcement
///
/// Every /otp endpoint requires the key; requests without one are 401
/// with the generic error body.
#[actix_web::test]
async fn test_missing_api_key_is_unauthorized_everywhere() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    for (method, uri) in [("GET", "/otp"), ("POST", "/otp/verify"), ("GET", "/otp/secure")] {
        let builder = if method == "POST" {
            test::TestRequest::post()
                .uri(uri)
                .set_json(serde_json::json!({"otp": "123456"}))
        } else {
            test::TestRequest::get().uri(uri)
        };
        let resp = test::call_service(&app, builder.to_request()).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "{} {} without a key should be 401",
            method,
            uri
        );
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "unauthorized"}),
            "{} {} should return the generic unauthorized body",
            method,
            uri
        );
    }
}

/// Integration test for 401 parity
///
/// A missing key and a wrong key must be indistinguishable from outside:
/// same status, same body.
#[actix_web::test]
async fn test_missing_and_wrong_keys_are_indistinguishable() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    let req = test::TestRequest::get().uri("/otp").to_request();
    let resp_missing = test::call_service(&app, req).await;
    let status_missing = resp_missing.status();
    let body_missing = test::read_body(resp_missing).await;

    let req = test::TestRequest::get()
        .uri("/otp")
        .insert_header(("X-API-Key", "wrong-key"))
        .to_request();
    let resp_wrong = test::call_service(&app, req).await;
    let status_wrong = resp_wrong.status();
    let body_wrong = test::read_body(resp_wrong).await;

    assert_eq!(status_missing, StatusCode::UNAUTHORIZED);
    assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_missing, body_wrong,
        "Missing and wrong keys must produce identical bodies"
    );
}

/// Integration test for near-miss keys
///
/// Prefixes, suffixes, and case variants of the real key must all fail.
#[actix_web::test]
async fn test_near_miss_keys_are_rejected() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    for key in ["test-api-ke", "test-api-keyy", "TEST-API-KEY", ""] {
        let req = test::TestRequest::get()
            .uri("/otp")
            .insert_header(("X-API-Key", key))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "Key {:?} should be rejected",
            key
        );
    }
}

/// Integration test for the signed endpoint, happy path
///
/// A fresh timestamp signed with the shared key passes both layers and
/// returns a code.
#[actix_web::test]
async fn test_secure_endpoint_accepts_a_fresh_signature() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    let timestamp = unix_now().to_string();
    let signature = sign_timestamp(TEST_API_KEY, &timestamp);

    let req = test::TestRequest::get()
        .uri("/otp/secure")
        .insert_header(("X-API-Key", TEST_API_KEY))
        .insert_header(("X-Timestamp", timestamp))
        .insert_header(("X-Signature", signature))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK, "Signed request should be 200");
    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let otp = json.get("otp").and_then(|v| v.as_str()).expect("otp field");
    assert_eq!(otp.len(), 6, "Code should be six digits");
}

/// Integration test for signature ordering
///
/// The API key is checked before the signature: a bad key on the secure
/// endpoint is a 401 even when the signature headers are absent or wrong.
#[actix_web::test]
async fn test_key_check_precedes_signature_check() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    let req = test::TestRequest::get()
        .uri("/otp/secure")
        .insert_header(("X-API-Key", "wrong-key"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::UNAUTHORIZED,
        "Key failures win over signature failures"
    );
}

/// Integration test for missing signature headers
///
/// With a valid key but no timestamp/signature, the secure endpoint is a
/// 403 with the generic signature body.
#[actix_web::test]
async fn test_secure_endpoint_requires_signature_headers() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    let req = test::TestRequest::get()
        .uri("/otp/secure")
        .insert_header(("X-API-Key", TEST_API_KEY))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN, "Unsigned request should be 403");
    let body = test::read_body(resp).await;
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"error": "invalid request signature"}),
        "Signature failures must use the generic body"
    );
}

/// Integration test for replay-window enforcement
///
/// Correctly signed timestamps from 31+ seconds away (either direction)
/// are rejected; 30 seconds of skew still passes.
#[actix_web::test]
async fn test_signature_replay_window() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    // The drifts sit several seconds away from the 30s boundary so that
    // seconds ticking between signing and the server-side clock read
    // cannot flip the outcome. Exact boundary behavior is pinned by the
    // FixedClock unit tests.
    for drift in [-3600i64, -40, 40, 3600] {
        let timestamp = (unix_now() + drift).to_string();
        let signature = sign_timestamp(TEST_API_KEY, &timestamp);
        let req = test::TestRequest::get()
            .uri("/otp/secure")
            .insert_header(("X-API-Key", TEST_API_KEY))
            .insert_header(("X-Timestamp", timestamp))
            .insert_header(("X-Signature", signature))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::FORBIDDEN,
            "{}s of drift should be rejected",
            drift
        );
    }

    for drift in [-25i64, 0, 25] {
        let timestamp = (unix_now() + drift).to_string();
        let signature = sign_timestamp(TEST_API_KEY, &timestamp);
        let req = test::TestRequest::get()
            .uri("/otp/secure")
            .insert_header(("X-API-Key", TEST_API_KEY))
            .insert_header(("X-Timestamp", timestamp))
            .insert_header(("X-Signature", signature))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "{}s of drift should be accepted",
            drift
        );
    }
}

/// Integration test for tampered signatures
///
/// Signatures over a different timestamp, signatures under a different
/// key, and uppercase hex all fail with the same 403.
#[actix_web::test]
async fn test_invalid_signatures_are_forbidden() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    let timestamp = unix_now().to_string();

    let wrong_message = sign_timestamp(TEST_API_KEY, "1");
    let wrong_key = sign_timestamp("not-the-api-key", &timestamp);
    let uppercase = sign_timestamp(TEST_API_KEY, &timestamp).to_uppercase();

    for (label, signature) in [
        ("signature over another timestamp", wrong_message),
        ("signature under another key", wrong_key),
        ("uppercase hex digest", uppercase),
        ("garbage", "zzzz".to_string()),
    ] {
        let req = test::TestRequest::get()
            .uri("/otp/secure")
            .insert_header(("X-API-Key", TEST_API_KEY))
            .insert_header(("X-Timestamp", timestamp.clone()))
            .insert_header(("X-Signature", signature))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::FORBIDDEN,
            "{} should be rejected",
            label
        );
    }
}

/// Integration test for malformed timestamps
///
/// Non-numeric timestamps collapse into the same generic 403 as any
/// other signature failure; the variant is not observable.
#[actix_web::test]
async fn test_malformed_timestamps_are_forbidden() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    for timestamp in ["not-a-number", "12.5", ""] {
        let signature = sign_timestamp(TEST_API_KEY, timestamp);
        let req = test::TestRequest::get()
            .uri("/otp/secure")
            .insert_header(("X-API-Key", TEST_API_KEY))
            .insert_header(("X-Timestamp", timestamp))
            .insert_header(("X-Signature", signature))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::FORBIDDEN,
            "Timestamp {:?} should be rejected",
            timestamp
        );
        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "invalid request signature"}),
            "Malformed timestamps must not get a distinct body"
        );
    }
}

/// Integration test for raw-string signing semantics
///
/// The server verifies the signature over the exact header bytes, so a
/// zero-padded timestamp works when (and only when) the client signed
/// that exact padded string.
#[actix_web::test]
async fn test_signature_covers_raw_timestamp_bytes() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    let padded = format!("{:0>13}", unix_now());
    let signature = sign_timestamp(TEST_API_KEY, &padded);

    let req = test::TestRequest::get()
        .uri("/otp/secure")
        .insert_header(("X-API-Key", TEST_API_KEY))
        .insert_header(("X-Timestamp", padded.clone()))
        .insert_header(("X-Signature", signature))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::OK,
        "A signature over the padded string should verify"
    );

    // Signing the canonical form but sending the padded one must fail
    let canonical_signature = sign_timestamp(TEST_API_KEY, &unix_now().to_string());
    let req = test::TestRequest::get()
        .uri("/otp/secure")
        .insert_header(("X-API-Key", TEST_API_KEY))
        .insert_header(("X-Timestamp", padded))
        .insert_header(("X-Signature", canonical_signature))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        StatusCode::FORBIDDEN,
        "Signing a re-serialized timestamp must not verify"
    );
}

/// Integration test for unauthenticated endpoints
///
/// Health, version, metrics, and the OpenAPI spec stay reachable
/// without any credentials.
#[actix_web::test]
async fn test_public_endpoints_require_no_credentials() {
    let config = test_config();
    let metrics = AppMetrics::new().unwrap();
    let app = test::init_service(create_app(&config, &metrics)).await;

    for path in ["/health", "/version", "/metrics", "/api/spec/v2"] {
        let req = test::TestRequest::get().uri(path).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::OK,
            "{} should not require credentials",
            path
        );
    }
}
