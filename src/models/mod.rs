//! Data models and schemas for the Keyfob API.
//!
//! This module contains all the data structures used throughout the
//! application: request/response models, secret newtypes, and audit types.

pub mod api;
pub mod audit;
pub mod secrets;

pub use api::*;
pub use audit::*;
pub use secrets::*;
