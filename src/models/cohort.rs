use serde::Serialize;

use super::patient::PatientId;

/// Which cohort a patient was placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CohortKind {
    HighRisk,
    Fever,
    DataQualityIssue,
}

impl CohortKind {
    /// All cohorts, in payload order.
    pub const ALL: [CohortKind; 3] = [
        CohortKind::HighRisk,
        CohortKind::Fever,
        CohortKind::DataQualityIssue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CohortKind::HighRisk => "high_risk_patients",
            CohortKind::Fever => "fever_patients",
            CohortKind::DataQualityIssue => "data_quality_issues",
        }
    }
}

/// Submission payload for `POST /submit-assessment`.
///
/// The three lists overlap freely: one patient can be high risk, febrile and
/// have a data-quality issue at the same time. Each list preserves the order
/// in which patients were fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CohortResult {
    pub high_risk_patients: Vec<PatientId>,
    pub fever_patients: Vec<PatientId>,
    pub data_quality_issues: Vec<PatientId>,
}

/// Per-cohort sizes, for run summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CohortCounts {
    pub high_risk_patients: usize,
    pub fever_patients: usize,
    pub data_quality_issues: usize,
}

impl CohortResult {
    pub fn push(&mut self, kind: CohortKind, id: PatientId) {
        match kind {
            CohortKind::HighRisk => self.high_risk_patients.push(id),
            CohortKind::Fever => self.fever_patients.push(id),
            CohortKind::DataQualityIssue => self.data_quality_issues.push(id),
        }
    }

    pub fn ids(&self, kind: CohortKind) -> &[PatientId] {
        match kind {
            CohortKind::HighRisk => &self.high_risk_patients,
            CohortKind::Fever => &self.fever_patients,
            CohortKind::DataQualityIssue => &self.data_quality_issues,
        }
    }

    pub fn counts(&self) -> CohortCounts {
        CohortCounts {
            high_risk_patients: self.high_risk_patients.len(),
            fever_patients: self.fever_patients.len(),
            data_quality_issues: self.data_quality_issues.len(),
        }
    }
}
