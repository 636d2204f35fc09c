//! End-to-end assessment run: fetch every patient, score, submit.
//!
//! Strictly sequential. All pages are fetched before any scoring starts, and
//! a failure at any stage aborts the run without submitting anything.

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::api::{ApiError, AssessmentGateway};
use crate::config::ConfigError;
use crate::models::CohortResult;
use crate::scoring::analyze;

#[derive(Error, Debug)]
pub enum AssessmentError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Assessment API error: {0}")]
    Api(#[from] ApiError),
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    pub run_id: Uuid,
    pub patients_fetched: usize,
    pub cohorts: CohortResult,
    /// Server acknowledgement, unmodified.
    pub acknowledgement: Value,
}

/// Fetch all patients, build the cohorts and submit them.
pub fn run_assessment(gateway: &AssessmentGateway) -> Result<AssessmentReport, AssessmentError> {
    let run_id = Uuid::new_v4();
    let _span = tracing::info_span!("assessment_run", run_id = %run_id).entered();

    tracing::info!("Fetching patients");
    let patients = gateway.fetch_all_patients()?;

    tracing::info!(patients = patients.len(), "Scoring");
    let cohorts = analyze(&patients);
    let counts = cohorts.counts();
    tracing::info!(
        high_risk = counts.high_risk_patients,
        fever = counts.fever_patients,
        data_quality = counts.data_quality_issues,
        "Cohorts built"
    );

    let acknowledgement = gateway.submit_assessment(&cohorts)?;
    tracing::info!("Assessment submitted");

    Ok(AssessmentReport {
        run_id,
        patients_fetched: patients.len(),
        cohorts,
        acknowledgement,
    })
}
