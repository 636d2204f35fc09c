pub mod client;
pub mod fetcher;
pub mod gateway;
pub mod mock;
pub mod retry;
pub mod submit;
pub mod types;

pub use client::*;
pub use fetcher::*;
pub use gateway::*;
pub use mock::*;
pub use retry::*;
pub use submit::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Assessment API is not reachable at {0}")]
    Connection(String),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Assessment API returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Assessment API still failing after {attempts} attempts (last status {status}): {body}")]
    RetriesExhausted {
        attempts: u32,
        status: u16,
        body: String,
    },

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Request encoding error: {0}")]
    RequestEncoding(String),
}

impl ApiError {
    /// HTTP status behind this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::RetriesExhausted { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
