use super::retry::RetryPolicy;
use super::types::{AssessmentTransport, Sleeper, ThreadSleeper};

/// Client-side endpoint of the assessment API: paginated patient reads
/// (`fetcher.rs`) and cohort submission (`submit.rs`) over one transport.
pub struct AssessmentGateway {
    pub(super) transport: Box<dyn AssessmentTransport + Send + Sync>,
    pub(super) sleeper: Box<dyn Sleeper + Send + Sync>,
    pub(super) retry: RetryPolicy,
}

impl AssessmentGateway {
    /// Gateway with the default retry policy and real sleeps.
    pub fn new(transport: Box<dyn AssessmentTransport + Send + Sync>) -> Self {
        Self {
            transport,
            sleeper: Box::new(ThreadSleeper),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_sleeper(mut self, sleeper: Box<dyn Sleeper + Send + Sync>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }
}
