use serde::Serialize;

use super::quality::DataQuality;
use super::risk::{has_fever, RiskScore};
use crate::models::{CohortKind, CohortResult, PatientRecord};

/// Full scoring breakdown for one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: RiskScore,
    pub fever: bool,
    pub quality: DataQuality,
}

impl RiskAssessment {
    pub fn total(&self) -> u8 {
        self.score.total()
    }

    /// Cohorts this record belongs to, in payload order.
    pub fn cohorts(&self) -> Vec<CohortKind> {
        let mut kinds = Vec::with_capacity(3);
        if self.score.is_high_risk() {
            kinds.push(CohortKind::HighRisk);
        }
        if self.fever {
            kinds.push(CohortKind::Fever);
        }
        if self.quality.has_issue() {
            kinds.push(CohortKind::DataQualityIssue);
        }
        kinds
    }
}

/// Score a single record.
pub fn assess(record: &PatientRecord) -> RiskAssessment {
    RiskAssessment {
        score: RiskScore::compute(
            record.blood_pressure.as_ref(),
            record.temperature.as_ref(),
            record.age.as_ref(),
        ),
        fever: has_fever(record.temperature.as_ref()),
        quality: DataQuality::inspect(record),
    }
}

/// Partition patients into the three submission cohorts.
///
/// Every record is scored, in input order. Records without a `patient_id`
/// cannot be reported back to the service, so they are logged and left out
/// of every cohort.
pub fn analyze(records: &[PatientRecord]) -> CohortResult {
    let _span = tracing::info_span!("analyze", records = records.len()).entered();
    let mut result = CohortResult::default();
    let mut skipped = 0usize;

    for (index, record) in records.iter().enumerate() {
        let assessment = assess(record);

        let Some(id) = record.patient_id.as_ref() else {
            skipped += 1;
            tracing::warn!(
                index,
                total = assessment.total(),
                "Patient record has no patient_id, excluded from cohorts"
            );
            continue;
        };

        tracing::debug!(
            patient_id = %id,
            bp = assessment.score.blood_pressure,
            temp = assessment.score.temperature,
            age = assessment.score.age,
            total = assessment.total(),
            fever = assessment.fever,
            invalid = ?assessment.quality.invalid_fields(),
            "Scored patient"
        );

        for kind in assessment.cohorts() {
            result.push(kind, id.clone());
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "Records without patient_id were not classified");
    }

    result
}
