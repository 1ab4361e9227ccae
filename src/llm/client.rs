use crate::completion::{CompletionRequest, TextGenerator};
use crate::error::{CofounderError, Result};
use crate::llm::types::*;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// `generateContent` over the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn generate_content(&self, api_key: &str, request: &CompletionRequest) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);

        let payload = GenerateContentRequest {
            contents: vec![Content::user(request.user_prompt.clone())],
            system_instruction: Some(Content::system(request.system_instruction.clone())),
            generation_config: GenerationConfig {
                temperature: request.temperature,
            },
        };

        let res = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await.map_err(transport_error)?;
            debug!("Gemini API error (status {}): {}", status, err_text);
            return Err(CofounderError::CompletionFailed(provider_message(
                status, &err_text,
            )));
        }

        let body: GenerateContentResponse = res.json().await.map_err(transport_error)?;
        Ok(body.text())
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, api_key: &str, request: &CompletionRequest) -> Result<String> {
        self.generate_content(api_key, request).await
    }
}

// The request URL is stripped so nothing request-specific ends up in the
// message shown to the user or in the logs.
fn transport_error(e: reqwest::Error) -> CofounderError {
    CofounderError::CompletionFailed(e.without_url().to_string())
}

/// The provider's own message if the body carries one, otherwise the raw body
/// or the status line.
fn provider_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorResponse>(body) {
        return parsed.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("Gemini API Error (status {})", status)
    } else {
        trimmed.to_string()
    }
}
