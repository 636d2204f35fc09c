pub mod api;
pub mod assessment;
pub mod config;
pub mod models;
pub mod scoring;

use tracing_subscriber::EnvFilter;

use api::{AssessmentGateway, HttpClient};
use assessment::{run_assessment, AssessmentError, AssessmentReport};
use config::ApiConfig;

/// Entry point for the `vitals-cohort` binary.
pub fn run() -> Result<AssessmentReport, AssessmentError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let api_config = ApiConfig::from_env()?;
    let client = HttpClient::new(&api_config)?;
    tracing::info!(base_url = client.base_url(), "Using assessment API");

    let gateway = AssessmentGateway::new(Box::new(client));
    run_assessment(&gateway)
}
