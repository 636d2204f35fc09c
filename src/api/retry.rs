use std::time::Duration;

use super::types::{HttpResponse, Sleeper};
use super::ApiError;

/// Statuses worth retrying: rate limiting and server-side unavailability.
pub const TRANSIENT_STATUSES: &[u16] = &[429, 500, 503];

/// Total attempts per request (1 + 3 retries).
pub const MAX_ATTEMPTS: u32 = 4;

/// Backoff grows by this much per retry: 1s, 2s, 3s.
pub const BACKOFF_STEP: Duration = Duration::from_secs(1);

pub fn is_transient(status: u16) -> bool {
    TRANSIENT_STATUSES.contains(&status)
}

/// Bounded retry with linearly increasing backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            backoff_step: BACKOFF_STEP,
        }
    }
}

impl RetryPolicy {
    /// Pause before the given 1-based attempt. The first attempt never waits.
    pub fn delay_before(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt.saturating_sub(1)
    }

    /// Run `send` until it yields a non-transient response or attempts run out.
    ///
    /// Success returns the response. A non-transient failure status is
    /// returned as `ApiError::Status` straight away; transport errors (no
    /// response at all) propagate unretried.
    pub fn run<F>(
        &self,
        sleeper: &dyn Sleeper,
        request: &str,
        mut send: F,
    ) -> Result<HttpResponse, ApiError>
    where
        F: FnMut() -> Result<HttpResponse, ApiError>,
    {
        let attempts = self.max_attempts.max(1);
        let mut last_transient: Option<HttpResponse> = None;

        for attempt in 1..=attempts {
            if attempt > 1 {
                let delay = self.delay_before(attempt);
                tracing::debug!(request, attempt, delay_secs = delay.as_secs_f64(), "Backing off");
                sleeper.sleep(delay);
            }

            let response = send()?;
            if !is_transient(response.status) {
                return response.error_for_status();
            }

            tracing::warn!(
                request,
                attempt,
                max_attempts = attempts,
                status = response.status,
                "Transient failure from assessment API"
            );
            last_transient = Some(response);
        }

        let (status, body) = last_transient
            .map(|r| (r.status, r.body))
            .unwrap_or_default();
        tracing::error!(request, attempts, status, "Retries exhausted");
        Err(ApiError::RetriesExhausted {
            attempts,
            status,
            body,
        })
    }
}
