use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque patient identifier as sent by the assessment API.
///
/// Usually a string such as `"DEMO001"`, but any JSON value is carried
/// through verbatim so submissions echo exactly what the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(Value);

impl PatientId {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// A single patient record from `GET /patients`.
///
/// Vital fields are kept as raw JSON: the service sends them loosely typed
/// and the scoring layer decides what is parseable. JSON `null` and a missing
/// key both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<PatientId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Value>,
    /// Fields the scoring engine does not look at (name, gender, visit dates...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pagination metadata attached to every page.
///
/// Only the continuation flag drives the fetch loop. Counters such as
/// `page`, `total` or `totalPages` are ignored so their types never matter.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Pagination {
    #[serde(default, rename = "hasNext")]
    pub has_next: Option<Value>,
}

/// Body of one `GET /patients` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PatientPage {
    #[serde(default)]
    pub data: Option<Vec<PatientRecord>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl PatientPage {
    /// Whether the service reported a further page.
    ///
    /// The flag is read loosely: `1` or `"true"` continue, while absent
    /// metadata, `null`, `false`, `0`, `""` and empty containers stop.
    pub fn has_next(&self) -> bool {
        self.pagination
            .as_ref()
            .and_then(|p| p.has_next.as_ref())
            .is_some_and(is_truthy)
    }

    pub fn into_records(self) -> Vec<PatientRecord> {
        self.data.unwrap_or_default()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
