use crate::config::GeminiConfig;
use crate::error::{AireError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Hosted text completion endpoint
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send a single prompt and return the completion text
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Model answering the prompts
    fn model_name(&self) -> &str;
}

/// Client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let parts = candidate.content.map(|c| c.parts).unwrap_or_default();
        Some(parts.into_iter().filter_map(|p| p.text).collect())
    }
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base, self.config.model
        )
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!("Sending {} byte prompt to {}", prompt.len(), self.config.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini returned status: {}", status);
            return Err(AireError::Completion { status, body });
        }

        let reply: GenerateResponse = response.json().await?;
        let text = reply.into_text().ok_or(AireError::EmptyCompletion)?;

        debug!("Received {} bytes of completion text", text.len());
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
