//! API Layer
//!
//! gloo-net wrappers over the portal REST API and the error type they share.

pub mod client;
pub mod error;

pub use client::*;
pub use error::ApiError;
