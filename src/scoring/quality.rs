use serde::Serialize;

use super::parser::{parse_blood_pressure, parse_numeric};
use crate::models::PatientRecord;

/// Which vitals on a record are absent or unparseable.
///
/// Independent of scoring: a bad vital scores 0 and is flagged here, so a
/// low score never implies clean data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DataQuality {
    pub invalid_blood_pressure: bool,
    pub invalid_temperature: bool,
    pub invalid_age: bool,
}

impl DataQuality {
    pub fn inspect(record: &PatientRecord) -> Self {
        Self {
            invalid_blood_pressure: parse_blood_pressure(record.blood_pressure.as_ref()).is_none(),
            invalid_temperature: parse_numeric(record.temperature.as_ref()).is_none(),
            invalid_age: parse_numeric(record.age.as_ref()).is_none(),
        }
    }

    pub fn has_issue(&self) -> bool {
        self.invalid_blood_pressure || self.invalid_temperature || self.invalid_age
    }

    /// Names of the offending fields, for log output.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.invalid_blood_pressure {
            fields.push("blood_pressure");
        }
        if self.invalid_temperature {
            fields.push("temperature");
        }
        if self.invalid_age {
            fields.push("age");
        }
        fields
    }
}

/// Whether any of age, temperature or blood pressure is absent or unparseable.
pub fn has_data_quality_issue(record: &PatientRecord) -> bool {
    DataQuality::inspect(record).has_issue()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn record(bp: Option<Value>, temp: Option<Value>, age: Option<Value>) -> PatientRecord {
        PatientRecord {
            blood_pressure: bp,
            temperature: temp,
            age,
            ..Default::default()
        }
    }

    #[test]
    fn complete_record_is_clean() {
        let r = record(Some(json!("120/80")), Some(json!(98.6)), Some(json!(45)));
        assert!(!has_data_quality_issue(&r));
        assert!(DataQuality::inspect(&r).invalid_fields().is_empty());
    }

    #[test]
    fn numeric_strings_are_clean() {
        let r = record(Some(json!("120/80")), Some(json!("98.6")), Some(json!("45")));
        assert!(!has_data_quality_issue(&r));
    }

    #[test]
    fn missing_field_is_an_issue() {
        assert!(has_data_quality_issue(&record(None, Some(json!(98.6)), Some(json!(45)))));
        assert!(has_data_quality_issue(&record(Some(json!("120/80")), None, Some(json!(45)))));
        assert!(has_data_quality_issue(&record(Some(json!("120/80")), Some(json!(98.6)), None)));
    }

    #[test]
    fn unparseable_field_is_an_issue() {
        let r = record(Some(json!("150/")), Some(json!("TEMP_ERROR")), Some(json!("unknown")));
        let quality = DataQuality::inspect(&r);
        assert!(quality.has_issue());
        assert_eq!(
            quality.invalid_fields(),
            vec!["blood_pressure", "temperature", "age"]
        );
    }

    #[test]
    fn only_offending_field_reported() {
        let r = record(Some(json!("N/A")), Some(json!(99.1)), Some(json!(30)));
        assert_eq!(DataQuality::inspect(&r).invalid_fields(), vec!["blood_pressure"]);
    }
}
