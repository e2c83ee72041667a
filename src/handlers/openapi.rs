//! OpenAPI specification generation and app factory.

use crate::{
    config::AppConfig,
    error::json_error_handler,
    handlers::{get_metrics, get_otp, get_otp_secure, health, verify_otp, version},
    middleware::{MetricsMiddleware, RequestIdMiddleware},
    services::{AppMetrics, RequestAuthenticator, SignatureAuthenticator, TotpEngine},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};

/// Creates the shared OpenAPI specification for the API
///
/// This includes documentation about API key authentication and the
/// timestamp-bound request signing scheme used by the secure endpoint.
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "Keyfob API".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Issues and verifies time-based one-time passwords for scripted 2FA flows.\n\n\
                ## API Key Authentication\n\
                All `/otp` endpoints require a pre-shared key:\n\
                - `X-API-Key`: the key exactly as configured, no encoding\n\
                \n\
                Requests with a missing or wrong key receive the same generic 401.\n\
                \n\
                ## Request Signing (`/otp/secure`)\n\
                The secure endpoint additionally requires a signed timestamp:\n\
                - `X-Timestamp`: Unix timestamp (seconds since epoch)\n\
                - `X-Signature`: HMAC-SHA256 signature in lowercase hexadecimal\n\
                \n\
                **Signature calculation:**\n\
                1. Take the exact `X-Timestamp` string you will send\n\
                2. Calculate HMAC-SHA256 over it using the API key as the secret\n\
                3. Encode the digest as lowercase hex\n\
                \n\
                Sign the header value byte-for-byte: re-formatting the timestamp after\n\
                signing invalidates the signature. Timestamps more than 30 seconds from\n\
                server time are rejected, which bounds how long a captured signature\n\
                can be replayed."
                    .into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates the application with shared configuration
///
/// This factory function creates a pre-configured Actix Web application with:
/// - Health, OTP, version, and metrics endpoints
/// - OpenAPI specification
/// - Request ID and metrics middleware
///
/// Authenticators and the OTP engine receive owned copies of the secret
/// material; the metrics registry is shared so all workers report into the
/// same series. Used both by `main` and by the integration tests.
pub fn create_app(
    config: &AppConfig,
    metrics: &AppMetrics,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    > + use<>,
> {
    let engine = TotpEngine::new(config.secrets.otp_secret.clone());
    let key_authenticator = RequestAuthenticator::new(config.secrets.api_key.clone());
    let signature_authenticator = SignatureAuthenticator::new(config.secrets.api_key.clone());

    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(MetricsMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(actix_web::web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(config.metrics.clone()))
        .app_data(web::Data::new(metrics.clone()))
        .app_data(web::Data::new(engine))
        .app_data(web::Data::new(key_authenticator))
        .app_data(web::Data::new(signature_authenticator))
        .service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/otp").route(web::get().to(get_otp)))
        .service(web::resource("/otp/verify").route(web::post().to(verify_otp)))
        .service(web::resource("/otp/secure").route(web::get().to(get_otp_secure)))
        .service(web::resource("/version").route(web::get().to(version)))
        .service(web::resource("/metrics").route(web::get().to(get_metrics)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}
