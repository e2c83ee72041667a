//! Utility functions and helper modules.
//!
//! This module contains the low-level primitives the authenticators are
//! built from (clock, constant-time comparison, HMAC digests) along with
//! HTTP request helpers.

pub mod clock;
pub mod compare;
pub mod hmac;
pub mod http;
pub mod route;

pub use clock::*;
pub use compare::*;
pub use hmac::*;
pub use http::*;
pub use route::*;
