use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::types::{AssessmentTransport, HttpResponse};
use super::ApiError;
use crate::config::ApiConfig;

/// Header carrying the assessment API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Blocking HTTP client for the assessment API.
pub struct HttpClient {
    base_url: String,
    api_key: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ApiError::Timeout(self.timeout_secs)
        } else {
            ApiError::HttpClient(e.to_string())
        }
    }

    fn read(&self, response: reqwest::blocking::Response) -> Result<HttpResponse, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.map_send_error(e))?;
        Ok(HttpResponse { status, body })
    }
}

impl AssessmentTransport for HttpClient {
    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .query(query)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        self.read(response)
    }

    fn post_json(&self, path: &str, body: &Value) -> Result<HttpResponse, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .map_err(|e| self.map_send_error(e))?;

        self.read(response)
    }
}
