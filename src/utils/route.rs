//! Route pattern extraction utilities.

use actix_web::HttpRequest;

/// Route label used for metrics.
///
/// Known routes are reported verbatim; everything else collapses into one
/// bucket so random probe paths cannot inflate label cardinality.
pub fn extract_route_pattern(req: &HttpRequest) -> String {
    match req.path() {
        path @ ("/health" | "/otp" | "/otp/verify" | "/otp/secure" | "/version" | "/metrics"
        | "/api/spec/v2") => path.to_string(),
        _ => "/other".to_string(),
    }
}
