use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// Status and raw body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into `ApiError::Status`.
    pub fn error_for_status(self) -> Result<Self, ApiError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ApiError::Status {
                status: self.status,
                body: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::ResponseParsing(e.to_string()))
    }
}

/// Request/response channel to the assessment API (allows mocking).
///
/// Implementations only move bytes: they return whatever status the server
/// sent and leave retry and status interpretation to the caller. Errors are
/// reserved for exchanges that produced no response at all.
pub trait AssessmentTransport {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, ApiError>;

    fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, ApiError>;
}

impl<T: AssessmentTransport + ?Sized> AssessmentTransport for Arc<T> {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, ApiError> {
        (**self).get(path, query)
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, ApiError> {
        (**self).post_json(path, body)
    }
}

/// Blocking pause between retry attempts (allows instant tests).
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

impl<T: Sleeper + ?Sized> Sleeper for Arc<T> {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
