//! Gemini narrative-review adapter.
//!
//! Blocking client for the `generateContent` endpoint. The wire contract
//! is small: one prompt in, `candidates[0].content.parts[0].text` out.

use crate::domain::error::JournalError;
use crate::ports::config_port::ConfigPort;
use crate::ports::insight_port::InsightPort;
use serde_json::json;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug)]
pub struct GeminiAdapter {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f64,
    top_p: f64,
}

impl GeminiAdapter {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, JournalError> {
        let api_key =
            config
                .get_string("gemini", "api_key")
                .ok_or_else(|| JournalError::ConfigMissing {
                    section: "gemini".into(),
                    key: "api_key".into(),
                })?;

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| JournalError::Insight {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: config
                .get_string("gemini", "endpoint")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            model: config
                .get_string("gemini", "model")
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key,
            temperature: config.get_double("gemini", "temperature", 0.7),
            top_p: config.get_double("gemini", "top_p", 0.95),
        })
    }

    fn request_body(&self, prompt: &str) -> serde_json::Value {
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "temperature": self.temperature,
                "topP": self.top_p,
            },
        })
    }
}

impl InsightPort for GeminiAdapter {
    fn generate(&self, prompt: &str) -> Result<String, JournalError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            self.model,
            self.api_key,
        );

        let response = self
            .client
            .post(&url)
            .json(&self.request_body(prompt))
            .send()
            .map_err(|e| JournalError::Insight {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(JournalError::Insight {
                reason: format!("HTTP {status}"),
            });
        }

        let body: serde_json::Value = response.json().map_err(|e| JournalError::Insight {
            reason: format!("malformed response: {e}"),
        })?;

        extract_text(&body).ok_or_else(|| JournalError::Insight {
            reason: "response contained no text".to_string(),
        })
    }
}

fn extract_text(response: &serde_json::Value) -> Option<String> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}
