// src/services/model_client.rs
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Settings;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("request to model backend failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model backend returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model backend returned no completion")]
    Empty,
}

/// External text-generation capability. The seam for swapping the real
/// backend out in tests.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String, ModelError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    temperature: f32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    text: String,
}

/// Client for an OpenAI-compatible completions endpoint.
pub struct HttpModelClient {
    client: reqwest::Client,
    model_name: String,
    api_base: String,
    api_key: Option<String>,
}

impl HttpModelClient {
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: reqwest::Client::new(),
            model_name: settings.model_name.clone(),
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn generate_text(&self, prompt: &str, temperature: f32) -> Result<String, ModelError> {
        let url = format!("{}/completions", self.api_base);
        debug!(model = %self.model_name, %url, "sending completion request");

        let mut request = self
            .client
            .post(&url)
            .timeout(REQUEST_TIMEOUT)
            .json(&CompletionRequest {
                model: &self.model_name,
                prompt,
                temperature,
            });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.text)
            .ok_or(ModelError::Empty)
    }
}
