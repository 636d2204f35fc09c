use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "vitals-cohort";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Assessment API used when `VITALS_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://assessment.ksensetech.com/api";

/// Per-request timeout used when `VITALS_HTTP_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_API_KEY: &str = "VITALS_API_KEY";
pub const ENV_BASE_URL: &str = "VITALS_API_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "VITALS_HTTP_TIMEOUT_SECS";

/// Prefix of the placeholder key shipped in sample env files.
const PLACEHOLDER_KEY_PREFIX: &str = "PUT_";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "vitals_cohort_lib=info,vitals_cohort=info,warn"
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key missing: set VITALS_API_KEY to your assessment API key")]
    MissingApiKey,

    #[error("VITALS_HTTP_TIMEOUT_SECS must be a positive number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Connection settings for the assessment API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty() && !k.starts_with(PLACEHOLDER_KEY_PREFIX))
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup(ENV_BASE_URL)
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}
