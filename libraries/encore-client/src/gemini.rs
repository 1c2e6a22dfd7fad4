//! Generative-text client used for song stories.

use crate::client::parse_response;
use crate::error::{ClientError, Result};
use crate::types::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use encore_core::StoryGenerator;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Default generative-text endpoint.
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Connection settings for the generative-text service.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base URL of the service
    pub url: String,
    /// Model name, e.g. "gemini-1.5-flash"
    pub model: String,
    /// API key; generation fails without one
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_GEMINI_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            api_key: None,
        }
    }
}

/// Client for the `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let url = config.url.trim_end_matches('/').to_string();
        url::Url::parse(&url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            http,
            config: GeminiConfig { url, ..config },
        })
    }

    /// Generate text for a prompt.
    ///
    /// Returns the first part of the first candidate.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ClientError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.url, self.config.model
        );
        debug!(url = %url, prompt_len = prompt.len(), "Generating text");

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&GeminiRequest::new(prompt))
            .send()
            .await
            .map_err(ClientError::from_send)?;

        let response: GeminiResponse = parse_response(response, "generateContent").await?;
        let text = response
            .first_text()
            .ok_or_else(|| ClientError::ParseError("response without candidates".to_string()))?;

        info!(chars = text.len(), "Generated text");
        Ok(text)
    }
}

#[async_trait]
impl StoryGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> encore_core::Result<String> {
        GeminiClient::generate(self, prompt).await.map_err(Into::into)
    }
}
