// src/suggestion/client.rs
use std::time::Duration;

use reqwest::header;

use crate::suggestion::models::{SuggestionRequest, SuggestionResponse};
use crate::utils::error::SuggestionError;

const SUGGESTION_PATH: &str = "/get-clothing-suggestion";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Talks to the suggestion-generation service. One request per call, no retries.
pub struct SuggestionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SuggestionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SuggestionError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, SUGGESTION_PATH)
    }

    /// Posts the form fields and returns the raw generated text.
    pub async fn fetch_suggestion(&self, request: &SuggestionRequest) -> Result<String, SuggestionError> {
        let url = self.endpoint();
        tracing::info!("Requesting clothing suggestion from: {}", url);
        tracing::debug!("Request payload: {:?}", request);

        let response = self.http.post(&url)
            .header(header::ACCEPT, "application/json")
            .json(request)
            .send()
            .await?; // Propagates reqwest::Error as SuggestionError::Network

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::error!("HTTP error status: {} for URL: {}", status, url);
            tracing::debug!("Error body: {}", body);
            return Err(SuggestionError::Http(status));
        }

        tracing::debug!("Received {} bytes from {}", body.len(), url);
        parse_response(&body)
    }
}

/// Pulls the generated text out of a successful response body.
pub fn parse_response(body: &str) -> Result<String, SuggestionError> {
    let parsed: SuggestionResponse = serde_json::from_str(body)
        .map_err(|e| SuggestionError::Parse(e.to_string()))?;

    if let Some(error) = parsed.error {
        return Err(SuggestionError::Service(error));
    }
    parsed
        .result
        .ok_or_else(|| SuggestionError::Parse("Response has no 'result' field".to_string()))
}
