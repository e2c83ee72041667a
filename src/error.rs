//! Transport-level error mapping.
//!
//! Service-layer error kinds collapse here into the handful of generic
//! HTTP responses the API is allowed to emit. Bodies never distinguish
//! failure variants; that detail goes to the audit log only.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::api::ErrorResponse;
use crate::services::auth::{AuthError, SignatureError};

/// Client-facing error outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// API key missing or wrong; one message for both.
    #[error("unauthorized")]
    Unauthorized,
    /// Signature malformed, mismatched, or outside the replay window.
    #[error("invalid request signature")]
    SignatureRejected,
    /// Request body failed deserialization.
    #[error("invalid request body")]
    BadRequest,
    #[error("internal server error")]
    Internal,
}

impl From<AuthError> for ApiError {
    fn from(_: AuthError) -> Self {
        ApiError::Unauthorized
    }
}

impl From<SignatureError> for ApiError {
    fn from(_: SignatureError) -> Self {
        ApiError::SignatureRejected
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::SignatureRejected => StatusCode::FORBIDDEN,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// JsonConfig hook turning payload deserialization failures into the
/// generic 400 body instead of actix's default plaintext response.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    actix_web::error::InternalError::from_response(err, ApiError::BadRequest.error_response())
        .into()
}
