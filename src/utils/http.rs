//! HTTP utility functions for extracting request information.

use actix_web::HttpRequest;

/// Value of a request header as UTF-8, if present.
pub fn header_value<'r>(req: &'r HttpRequest, name: &str) -> Option<&'r str> {
    req.headers().get(name).and_then(|h| h.to_str().ok())
}

/// Extract the client IP address for audit logs.
///
/// Prefers proxy-supplied headers, falling back to the peer address of the
/// connection. `X-Forwarded-For` may carry a chain; the first hop is the
/// original client.
pub fn extract_client_ip(req: &HttpRequest) -> String {
    for header_name in ["X-Forwarded-For", "X-Real-IP"] {
        if let Some(raw) = header_value(req, header_name) {
            let ip = raw.split(',').next().unwrap_or(raw).trim();
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}

/// Extract the user agent, if the caller sent one.
pub fn extract_user_agent(req: &HttpRequest) -> Option<String> {
    header_value(req, "User-Agent").map(|ua| ua.to_string())
}
