//! API Error Types
//!
//! Failure modes of calls against the portal API.

use thiserror::Error;

/// Errors surfaced by the API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request never completed (connection refused, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Server rejected the operation with an `{error}` body
    #[error("{0}")]
    Rejected(String),

    /// Mutation response carried neither `message` nor `error`
    #[error("The server returned neither a confirmation nor an error")]
    EmptyReply,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
