//! Gemini API client implementation
//!
//! Implements the LlmClient trait against the generateContent endpoint.
//! One request per turn: no streaming, no retry - a failed call degrades
//! to the planner's canned apology.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{ChatRequest, ChatResponse, LlmClient, LlmError, Role};
use crate::config::LlmConfig;

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// Reads the API key from the configured environment variable and
    /// builds an HTTP client with the configured request timeout.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        debug!(model = %config.model, "GeminiClient::from_config: called");
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            LlmError::InvalidResponse(format!("API key not found in environment variable {}", config.api_key_env))
        })?;

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    /// Build the request body for the generateContent API
    ///
    /// Gemini takes the system instruction out-of-band and names the
    /// assistant role "model".
    fn build_request_body(&self, request: &ChatRequest) -> serde_json::Value {
        debug!(message_count = %request.messages.len(), "build_request_body: called");

        let contents: Vec<serde_json::Value> = request
            .messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{"text": msg.text}],
                })
            })
            .collect();

        serde_json::json!({
            "system_instruction": {
                "parts": [{"text": request.system_prompt}]
            },
            "contents": contents,
        })
    }

    /// Extract the response text from the API payload
    fn parse_response(&self, api_response: GeminiResponse) -> Result<ChatResponse, LlmError> {
        let candidate = api_response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates in response".to_string()))?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse("Empty candidate content".to_string()));
        }

        Ok(ChatResponse { text })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        debug!(model = %self.model, "complete: called");
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(LlmError::Network)?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            debug!(%status, "complete: API error");
            let text = response.text().await.unwrap_or_default();
            return Err(LlmError::ApiError { status, message: text });
        }

        debug!("complete: success");
        let api_response: GeminiResponse = response.json().await?;
        self.parse_response(api_response)
    }
}

// Gemini API response types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
