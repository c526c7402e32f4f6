//! Generation endpoint client (POST /api/generate).

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Why a generation request failed. The app turns any of these into the
/// fixed apology string; the cause only reaches the log.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("generation request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation endpoint returned HTTP {0}")]
    Status(StatusCode),
}

/// Turns a prompt into reply text. Implemented by the HTTP client and by
/// the offline canned responder; the app only sees this seam.
pub trait Generator {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    text: String,
}

pub struct GenerateClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl GenerateClient {
    pub fn new(base_url: String) -> Self {
        // No request timeout: a request runs to completion or failure.
        let client = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .expect("reqwest client");
        Self { base_url, client }
    }
}

impl Generator for GenerateClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({ "prompt": prompt });
        let resp = self.client.post(&url).json(&body).send()?;
        if !resp.status().is_success() {
            return Err(GenerateError::Status(resp.status()));
        }
        let reply: GenerateResponse = resp.json()?;
        Ok(reply.text)
    }
}
