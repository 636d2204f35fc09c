use super::gateway::AssessmentGateway;
use super::ApiError;
use crate::models::{PatientPage, PatientRecord};

pub const PATIENTS_PATH: &str = "/patients";

/// Records requested per page.
pub const PAGE_SIZE: u32 = 20;

impl AssessmentGateway {
    /// Fetch one page of patients, retrying transient failures.
    pub fn fetch_page(&self, page: u32) -> Result<PatientPage, ApiError> {
        let query = [("page", page.to_string()), ("limit", PAGE_SIZE.to_string())];
        let response = self.retry.run(self.sleeper.as_ref(), PATIENTS_PATH, || {
            self.transport.get(PATIENTS_PATH, &query)
        })?;
        response.json()
    }

    /// Walk every page, starting at 1, until the service stops reporting
    /// `hasNext`. Records come back in page order.
    ///
    /// A failed page fails the whole fetch; nothing already fetched is kept.
    pub fn fetch_all_patients(&self) -> Result<Vec<PatientRecord>, ApiError> {
        let _span = tracing::info_span!("fetch_all_patients").entered();
        let mut patients = Vec::new();
        let mut page = 1u32;

        loop {
            let batch = self.fetch_page(page)?;
            let has_next = batch.has_next();
            let records = batch.into_records();
            tracing::debug!(page, records = records.len(), has_next, "Fetched patient page");
            patients.extend(records);

            if !has_next {
                break;
            }
            page += 1;
        }

        tracing::info!(pages = page, patients = patients.len(), "Fetched all patients");
        Ok(patients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::{RecordingSleeper, ScriptedTransport};
    use crate::api::types::HttpResponse;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn page_body(ids: &[&str], has_next: bool) -> HttpResponse {
        let data: Vec<_> = ids
            .iter()
            .map(|id| json!({"patient_id": id, "age": 50, "temperature": 98.6, "blood_pressure": "120/80"}))
            .collect();
        HttpResponse::new(
            200,
            json!({"data": data, "pagination": {"hasNext": has_next}}).to_string(),
        )
    }

    fn gateway(
        transport: &Arc<ScriptedTransport>,
        sleeper: &Arc<RecordingSleeper>,
    ) -> AssessmentGateway {
        AssessmentGateway::new(Box::new(Arc::clone(transport)))
            .with_sleeper(Box::new(Arc::clone(sleeper)))
    }

    fn ids(records: &[PatientRecord]) -> Vec<String> {
        records
            .iter()
            .filter_map(|r| r.patient_id.as_ref().map(|id| id.to_string()))
            .collect()
    }

    #[test]
    fn three_pages_concatenated_in_order() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            page_body(&["DEMO001", "DEMO002"], true),
            page_body(&["DEMO003"], true),
            page_body(&["DEMO004", "DEMO005"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();

        assert_eq!(
            ids(&patients),
            vec!["DEMO001", "DEMO002", "DEMO003", "DEMO004", "DEMO005"]
        );
        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        for (i, request) in requests.iter().enumerate() {
            assert_eq!(request.path, PATIENTS_PATH);
            assert_eq!(request.query_param("page"), Some((i + 1).to_string().as_str()));
            assert_eq!(request.query_param("limit"), Some("20"));
        }
        assert!(sleeper.delays().is_empty());
    }

    #[test]
    fn missing_pagination_stops_after_first_page() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            HttpResponse::new(200, json!({"data": [{"patient_id": "DEMO001"}]}).to_string()),
            page_body(&["DEMO999"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();

        assert_eq!(ids(&patients), vec!["DEMO001"]);
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn loosely_typed_pagination_counters_are_tolerated() {
        let transport = Arc::new(ScriptedTransport::new(vec![HttpResponse::new(
            200,
            json!({
                "data": [{"patient_id": "DEMO001"}],
                "pagination": {"page": "1", "total": 50.0, "hasNext": false}
            })
            .to_string(),
        )]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();
        assert_eq!(ids(&patients), vec!["DEMO001"]);
    }

    #[test]
    fn numeric_has_next_flag_is_read_by_truthiness() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            HttpResponse::new(
                200,
                json!({"data": [{"patient_id": "DEMO001"}], "pagination": {"hasNext": 1}})
                    .to_string(),
            ),
            HttpResponse::new(
                200,
                json!({"data": [{"patient_id": "DEMO002"}], "pagination": {"hasNext": 0}})
                    .to_string(),
            ),
            page_body(&["DEMO999"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();

        assert_eq!(ids(&patients), vec!["DEMO001", "DEMO002"]);
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn page_without_data_contributes_nothing() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            HttpResponse::new(200, json!({"pagination": {"hasNext": true}}).to_string()),
            page_body(&["DEMO002"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();
        assert_eq!(ids(&patients), vec!["DEMO002"]);
    }

    #[test]
    fn transient_failures_retried_then_succeed() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            HttpResponse::new(429, "rate limited"),
            HttpResponse::new(503, "unavailable"),
            page_body(&["DEMO001"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();

        assert_eq!(ids(&patients), vec!["DEMO001"]);
        assert_eq!(transport.requests().len(), 3);
        assert_eq!(
            sleeper.delays(),
            vec![Duration::from_secs(1), Duration::from_secs(2)]
        );
    }

    #[test]
    fn retry_applies_per_page() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            page_body(&["DEMO001"], true),
            HttpResponse::new(500, "oops"),
            page_body(&["DEMO002"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let patients = gateway(&transport, &sleeper).fetch_all_patients().unwrap();

        assert_eq!(ids(&patients), vec!["DEMO001", "DEMO002"]);
        let pages: Vec<_> = transport
            .requests()
            .iter()
            .map(|r| r.query_param("page").map(str::to_string))
            .collect();
        assert_eq!(
            pages,
            vec![Some("1".into()), Some("2".into()), Some("2".into())]
        );
        assert_eq!(sleeper.delays(), vec![Duration::from_secs(1)]);
    }

    #[test]
    fn four_transient_failures_are_fatal() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            HttpResponse::new(503, "down"),
            HttpResponse::new(503, "down"),
            HttpResponse::new(500, "down"),
            HttpResponse::new(429, "slow down"),
            page_body(&["DEMO001"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let err = gateway(&transport, &sleeper).fetch_all_patients().unwrap_err();

        assert!(matches!(
            err,
            ApiError::RetriesExhausted {
                attempts: 4,
                status: 429,
                ..
            }
        ));
        assert_eq!(transport.requests().len(), 4);
        assert_eq!(sleeper.delays().len(), 3);
    }

    #[test]
    fn auth_failure_propagates_without_retry() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            HttpResponse::new(401, r#"{"error":"Invalid API key"}"#),
            page_body(&["DEMO001"], false),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let err = gateway(&transport, &sleeper).fetch_all_patients().unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(transport.requests().len(), 1);
        assert!(sleeper.delays().is_empty());
    }

    #[test]
    fn failure_on_later_page_discards_earlier_pages() {
        let transport = Arc::new(ScriptedTransport::new(vec![
            page_body(&["DEMO001"], true),
            HttpResponse::new(404, "no such page"),
        ]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let result = gateway(&transport, &sleeper).fetch_all_patients();
        assert!(matches!(result, Err(ApiError::Status { status: 404, .. })));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let transport = Arc::new(ScriptedTransport::new(vec![HttpResponse::new(
            200,
            "<html>gateway</html>",
        )]));
        let sleeper = Arc::new(RecordingSleeper::default());

        let err = gateway(&transport, &sleeper).fetch_all_patients().unwrap_err();
        assert!(matches!(err, ApiError::ResponseParsing(_)));
    }
}
