//! Audit logging data structures and types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Authentication layers that produce audit events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventType {
    ApiKey,
    Signature,
}

/// Outcomes of authentication checks
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthEventOutcome {
    Success,
    Failure,
}

/// Structured audit entry for one authentication decision.
///
/// Carries request metadata only. Presented keys, signatures, and codes
/// have no field here, so the event cannot leak secret material; the
/// internal failure reason is logged but never returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthAuditEvent {
    pub event_type: AuthEventType,
    pub outcome: AuthEventOutcome,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub user_agent: Option<String>,
    pub method: String,
    pub endpoint: String,
    pub request_id: Option<String>,
    pub reason: Option<String>,
}

impl AuthAuditEvent {
    /// Create a new audit event with request metadata
    pub fn new(
        event_type: AuthEventType,
        outcome: AuthEventOutcome,
        ip_address: String,
        method: String,
        endpoint: String,
    ) -> Self {
        Self {
            event_type,
            outcome,
            timestamp: Utc::now(),
            ip_address,
            user_agent: None,
            method,
            endpoint,
            request_id: None,
            reason: None,
        }
    }

    /// Add user agent information
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Add the request ID assigned by the logging middleware
    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    /// Add the internal failure reason
    pub fn with_reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    /// Log the audit event using structured logging
    pub fn log(&self) {
        info!(
            target: "auth_audit",
            event_type = ?self.event_type,
            outcome = ?self.outcome,
            timestamp = %self.timestamp,
            ip_address = %self.ip_address,
            user_agent = ?self.user_agent,
            method = %self.method,
            endpoint = %self.endpoint,
            request_id = ?self.request_id,
            reason = ?self.reason,
            "Authentication audit event"
        );
    }
}
