use serde::Serialize;
use serde_json::Value;

use super::parser::{parse_blood_pressure, parse_numeric};

/// Fixed clinical thresholds used by the sub-scorers.
pub mod thresholds {
    /// Total score at or above which a patient is high risk.
    pub const HIGH_RISK_TOTAL: u8 = 4;

    /// Temperature (°F) at or above which a patient has a fever.
    pub const FEVER_TEMP: f64 = 99.6;
    /// Temperature (°F) at or above which a fever is scored as high.
    pub const HIGH_FEVER_TEMP: f64 = 101.0;

    pub const STAGE2_SYSTOLIC: f64 = 140.0;
    pub const STAGE2_DIASTOLIC: f64 = 90.0;
    pub const STAGE1_SYSTOLIC_MIN: f64 = 130.0;
    pub const STAGE1_SYSTOLIC_MAX: f64 = 139.0;
    pub const STAGE1_DIASTOLIC_MIN: f64 = 80.0;
    pub const STAGE1_DIASTOLIC_MAX: f64 = 89.0;
    pub const ELEVATED_SYSTOLIC_MIN: f64 = 120.0;
    pub const ELEVATED_SYSTOLIC_MAX: f64 = 129.0;

    pub const MIDDLE_AGE_MIN: f64 = 40.0;
    pub const MIDDLE_AGE_MAX: f64 = 65.0;
}

use thresholds::*;

/// Blood pressure stage, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureStage {
    Stage2,
    Stage1,
    Elevated,
    Normal,
    /// Parsed, but no staging rule matched (e.g. systolic 139.5).
    Unstaged,
}

impl BloodPressureStage {
    /// Classify a reading. First matching rule wins; the ranges overlap on
    /// purpose, so the order of these checks is significant.
    pub fn classify(systolic: f64, diastolic: f64) -> Self {
        let in_range = |v: f64, lo: f64, hi: f64| lo <= v && v <= hi;

        if systolic >= STAGE2_SYSTOLIC || diastolic >= STAGE2_DIASTOLIC {
            BloodPressureStage::Stage2
        } else if in_range(systolic, STAGE1_SYSTOLIC_MIN, STAGE1_SYSTOLIC_MAX)
            || in_range(diastolic, STAGE1_DIASTOLIC_MIN, STAGE1_DIASTOLIC_MAX)
        {
            BloodPressureStage::Stage1
        } else if in_range(systolic, ELEVATED_SYSTOLIC_MIN, ELEVATED_SYSTOLIC_MAX)
            && diastolic < STAGE1_DIASTOLIC_MIN
        {
            BloodPressureStage::Elevated
        } else if systolic < ELEVATED_SYSTOLIC_MIN && diastolic < STAGE1_DIASTOLIC_MIN {
            BloodPressureStage::Normal
        } else {
            BloodPressureStage::Unstaged
        }
    }

    pub fn score(self) -> u8 {
        match self {
            BloodPressureStage::Stage2 => 3,
            BloodPressureStage::Stage1 => 2,
            BloodPressureStage::Elevated => 1,
            BloodPressureStage::Normal | BloodPressureStage::Unstaged => 0,
        }
    }
}

/// 0–3. Unparseable readings score 0.
pub fn score_blood_pressure(raw: Option<&Value>) -> u8 {
    match parse_blood_pressure(raw) {
        Some((systolic, diastolic)) => BloodPressureStage::classify(systolic, diastolic).score(),
        None => 0,
    }
}

/// 0–2. Unparseable temperatures score 0.
pub fn score_temperature(raw: Option<&Value>) -> u8 {
    match parse_numeric(raw) {
        Some(t) if t >= HIGH_FEVER_TEMP => 2,
        Some(t) if t >= FEVER_TEMP => 1,
        _ => 0,
    }
}

/// 0–2. Unparseable ages score 0.
pub fn score_age(raw: Option<&Value>) -> u8 {
    match parse_numeric(raw) {
        Some(a) if a > MIDDLE_AGE_MAX => 2,
        Some(a) if (MIDDLE_AGE_MIN..=MIDDLE_AGE_MAX).contains(&a) => 1,
        _ => 0,
    }
}

/// Whether the temperature parses and reaches the fever threshold.
pub fn has_fever(raw: Option<&Value>) -> bool {
    parse_numeric(raw).is_some_and(|t| t >= FEVER_TEMP)
}

/// Sub-scores for one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskScore {
    pub blood_pressure: u8,
    pub temperature: u8,
    pub age: u8,
}

impl RiskScore {
    pub fn compute(
        blood_pressure: Option<&Value>,
        temperature: Option<&Value>,
        age: Option<&Value>,
    ) -> Self {
        Self {
            blood_pressure: score_blood_pressure(blood_pressure),
            temperature: score_temperature(temperature),
            age: score_age(age),
        }
    }

    /// Sum of the sub-scores, 0–7.
    pub fn total(&self) -> u8 {
        self.blood_pressure + self.temperature + self.age
    }

    pub fn is_high_risk(&self) -> bool {
        self.total() >= HIGH_RISK_TOTAL
    }
}
