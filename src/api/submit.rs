use serde_json::Value;

use super::gateway::AssessmentGateway;
use super::ApiError;
use crate::models::CohortResult;

pub const SUBMIT_PATH: &str = "/submit-assessment";

impl AssessmentGateway {
    /// Submit the three cohorts in a single request.
    ///
    /// Not retried: a duplicate submission is not safe to assume harmless.
    /// The server's acknowledgement is returned exactly as received.
    pub fn submit_assessment(&self, cohorts: &CohortResult) -> Result<Value, ApiError> {
        let body =
            serde_json::to_value(cohorts).map_err(|e| ApiError::RequestEncoding(e.to_string()))?;

        let counts = cohorts.counts();
        tracing::info!(
            high_risk = counts.high_risk_patients,
            fever = counts.fever_patients,
            data_quality = counts.data_quality_issues,
            "Submitting assessment"
        );

        let response = self.transport.post_json(SUBMIT_PATH, &body)?;
        let response = response.error_for_status()?;
        response.json()
    }
}
