//! HTTP client for the generative-language `generateContent` endpoint.

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    error::ApiError,
    protocol::{GenerateContentRequest, GenerateContentResponse},
};
use tracing::{debug, warn};
use url::Url;

use crate::{error::BriefError, BriefSource};

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Clone)]
pub struct GeminiConfig {
    pub api_base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_http_client(Client::new(), config)
    }

    pub fn with_http_client(http: Client, config: GeminiConfig) -> Self {
        if config.api_key.is_none() {
            warn!("no Gemini API key configured; brief requests will be rejected upstream");
        }
        Self { http, config }
    }

    /// `{base}/models/{model}:generateContent?key={api_key}`
    pub fn endpoint(&self) -> Result<Url, BriefError> {
        let mut url = Url::parse(&format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        ))?;
        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }
}

#[async_trait]
impl BriefSource for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, BriefError> {
        let url = self.endpoint()?;
        debug!(model = %self.config.model, "gemini: generateContent");

        let response = self
            .http
            .post(url)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_body(status.as_u16(), &body);
            return Err(BriefError::Status {
                status: status.as_u16(),
                source: error.into(),
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.first_text()
            .map(str::to_owned)
            .ok_or(BriefError::EmptyResponse)
    }
}

#[cfg(test)]
#[path = "tests/gemini_tests.rs"]
mod tests;
