//! OTP endpoint handlers.
//!
//! All three endpoints require the static API key; `/otp/secure`
//! additionally demands a timestamp-bound request signature. The guards
//! run inside the handlers so every authentication decision lands in the
//! audit log with full request context before the generic error response
//! goes out.

use crate::{
    error::ApiError,
    middleware::request_id::RequestId,
    models::{
        api::{OtpResponse, VerifyRequest, VerifyResponse},
        audit::{AuthAuditEvent, AuthEventOutcome, AuthEventType},
    },
    services::{
        auth::{
            API_KEY_HEADER, RequestAuthenticator, SIGNATURE_HEADER, SignatureAuthenticator,
            TIMESTAMP_HEADER,
        },
        totp::TotpEngine,
    },
    utils::http::{extract_client_ip, extract_user_agent, header_value},
};
use actix_web::{Error, HttpMessage, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;

/// Fetch a component registered on the app.
///
/// Absence is a wiring fault, not a client error; it is logged and
/// surfaced as a generic 500.
fn component<'r, T: 'static>(req: &'r HttpRequest) -> Result<&'r web::Data<T>, ApiError> {
    req.app_data::<web::Data<T>>().ok_or_else(|| {
        tracing::error!(
            component = std::any::type_name::<T>(),
            "component missing from app data"
        );
        ApiError::Internal
    })
}

/// Emit an audit event for one authentication decision on this request.
fn audit(
    req: &HttpRequest,
    event_type: AuthEventType,
    outcome: AuthEventOutcome,
    reason: Option<String>,
) {
    let request_id = req.extensions().get::<RequestId>().map(|id| id.0.clone());

    AuthAuditEvent::new(
        event_type,
        outcome,
        extract_client_ip(req),
        req.method().to_string(),
        req.uri().path().to_string(),
    )
    .with_user_agent(extract_user_agent(req))
    .with_request_id(request_id)
    .with_reason(reason)
    .log();
}

/// API key guard shared by every OTP endpoint.
///
/// Missing and wrong keys audit differently but surface as the same 401.
fn require_api_key(req: &HttpRequest) -> Result<(), ApiError> {
    let authenticator = component::<RequestAuthenticator>(req)?;

    match authenticator.authenticate(header_value(req, API_KEY_HEADER)) {
        Ok(()) => {
            audit(req, AuthEventType::ApiKey, AuthEventOutcome::Success, None);
            Ok(())
        }
        Err(err) => {
            audit(
                req,
                AuthEventType::ApiKey,
                AuthEventOutcome::Failure,
                Some(err.to_string()),
            );
            Err(err.into())
        }
    }
}

/// Signature guard for the high-trust endpoint.
///
/// The failure variant reaches the audit log only; callers see one
/// generic 403.
fn require_signature(req: &HttpRequest) -> Result<(), ApiError> {
    let authenticator = component::<SignatureAuthenticator>(req)?;

    match authenticator.verify(
        header_value(req, TIMESTAMP_HEADER),
        header_value(req, SIGNATURE_HEADER),
    ) {
        Ok(()) => {
            audit(req, AuthEventType::Signature, AuthEventOutcome::Success, None);
            Ok(())
        }
        Err(err) => {
            audit(
                req,
                AuthEventType::Signature,
                AuthEventOutcome::Failure,
                Some(err.to_string()),
            );
            Err(err.into())
        }
    }
}

/// Current OTP endpoint
///
/// Returns the code for the current time step along with its remaining
/// lifetime, for scripted 2FA flows that type the code somewhere else.
#[api_v2_operation(
    summary = "Current OTP",
    description = "Returns the OTP for the current 30-second time step and how long it remains valid.",
    tags("OTP"),
    responses(
        (status = 200, description = "Current code", body = OtpResponse),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn get_otp(req: HttpRequest) -> Result<web::Json<OtpResponse>, Error> {
    require_api_key(&req)?;

    let engine = component::<TotpEngine>(&req)?;
    Ok(web::Json(engine.issue()))
}

/// OTP verification endpoint
///
/// Checks a candidate code against the current verification window,
/// tolerating one step of clock drift on either side.
#[api_v2_operation(
    summary = "Verify OTP",
    description = "Validates a candidate code against the current time step and its immediate neighbors.",
    tags("OTP"),
    responses(
        (status = 200, description = "Verification outcome", body = VerifyResponse),
        (status = 400, description = "Malformed request body"),
        (status = 401, description = "Missing or invalid API key")
    )
)]
pub async fn verify_otp(
    req: HttpRequest,
    payload: web::Json<VerifyRequest>,
) -> Result<web::Json<VerifyResponse>, Error> {
    require_api_key(&req)?;

    let engine = component::<TotpEngine>(&req)?;
    Ok(web::Json(engine.verify(&payload.otp)))
}

/// Signed OTP endpoint
///
/// Same payload as `/otp`, but the request must also carry a fresh
/// HMAC-SHA256 signature over its `X-Timestamp` header.
#[api_v2_operation(
    summary = "Current OTP (signed request)",
    description = "Returns the current OTP; requires both the API key and a timestamp-bound HMAC-SHA256 request signature.",
    tags("OTP"),
    responses(
        (status = 200, description = "Current code", body = OtpResponse),
        (status = 401, description = "Missing or invalid API key"),
        (status = 403, description = "Missing, stale, or invalid request signature")
    )
)]
pub async fn get_otp_secure(req: HttpRequest) -> Result<web::Json<OtpResponse>, Error> {
    require_api_key(&req)?;
    require_signature(&req)?;

    let engine = component::<TotpEngine>(&req)?;
    Ok(web::Json(engine.issue()))
}
