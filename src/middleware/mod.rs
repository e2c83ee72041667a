//! Custom middleware implementations for the API.
//!
//! This module contains middleware for request IDs, metrics collection,
//! and other cross-cutting concerns.

pub mod metrics;
pub mod request_id;

pub use metrics::*;
pub use request_id::*;
