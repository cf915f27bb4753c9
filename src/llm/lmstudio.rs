//! LM Studio completion client
//!
//! Implements the CompletionClient trait against the legacy completions
//! endpoint exposed by LM Studio style local backends
//! (`POST {base_url}/v1/engines/default/completions`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{Completion, CompletionClient, LlmError};
use crate::config::LlmConfig;

/// Client for a locally hosted completion backend
pub struct LmStudioClient {
    base_url: String,
    temperature: f64,
    http: Client,
}

impl LmStudioClient {
    /// Create a client from configuration
    ///
    /// Sampling temperature is fixed here; token budgets are passed per call
    /// by the planner and responder.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(LlmError::Network)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            http,
        })
    }

    /// Build the request body for the completions endpoint
    fn build_request_body(&self, prompt: &str, max_tokens: u32) -> serde_json::Value {
        serde_json::json!({
            "prompt": prompt,
            "max_tokens": max_tokens,
            "n": 1,
            "stop": null,
            "temperature": self.temperature,
        })
    }

    /// Interpret a backend response as a completion outcome
    ///
    /// Pure over (status, body) so the protocol mapping is testable without
    /// a live backend: 200 with at least one choice yields the first
    /// choice's text verbatim, 200 with no choices is `Empty`, anything
    /// else is `Unavailable`.
    fn interpret_response(status: u16, body: &str) -> Completion {
        if status != 200 {
            return Completion::Unavailable(LlmError::ApiError {
                status,
                message: body.to_string(),
            });
        }

        match serde_json::from_str::<CompletionsResponse>(body) {
            Ok(response) => match response.choices.into_iter().next() {
                Some(choice) => Completion::Generated(choice.text),
                None => Completion::Empty,
            },
            Err(e) => Completion::Unavailable(LlmError::MalformedResponse(e.to_string())),
        }
    }
}

#[async_trait]
impl CompletionClient for LmStudioClient {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Completion {
        let url = format!("{}/v1/engines/default/completions", self.base_url);
        let body = self.build_request_body(prompt, max_tokens);
        debug!(%url, max_tokens, prompt_len = prompt.len(), "generate: sending completion request");

        let response = match self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "generate: network error");
                return Completion::Unavailable(LlmError::Network(e));
            }
        };

        let status = response.status().as_u16();
        let text = match response.text().await {
            Ok(t) => t,
            Err(e) => return Completion::Unavailable(LlmError::Network(e)),
        };

        Self::interpret_response(status, &text)
    }
}

// Backend response shape: only the first choice's text is consumed.

#[derive(Debug, Deserialize)]
struct CompletionsResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}
