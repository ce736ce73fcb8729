//! LLM Client — the single point of entry for all chat-completion calls in Resumate.
//!
//! Every prompt builder hands its prompt to a `Completion` implementation; no other
//! module talks to the upstream API directly.
//!
//! Model: llama-4-scout-17b-16e-instruct (hardcoded, along with the sampling parameters)
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

use prompts::ASSISTANT_SYSTEM;

/// The model used for all completion calls.
pub const MODEL: &str = "llama-4-scout-17b-16e-instruct";
const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("CEREBRAS_API_KEY not found in environment variables")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No response generated")]
    EmptyChoices,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
    model: Option<String>,
    #[serde(default)]
    usage: Value,
    created: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Upstream error bodies come either OpenAI-style (`{"error": {"message"}}`)
/// or flat (`{"message"}`).
#[derive(Debug, Deserialize)]
struct UpstreamError {
    error: Option<UpstreamErrorBody>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpstreamErrorBody {
    message: String,
}

/// Model, token usage and creation time reported alongside a completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionMetadata {
    pub model: String,
    /// Passed through untouched; the shape is owned by the upstream API.
    pub usage: Value,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}

/// Generated text plus metadata. Serializes as `{"response", "metadata"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResult {
    #[serde(rename = "response")]
    pub text: String,
    pub metadata: CompletionMetadata,
}

impl ChatResponse {
    /// Takes the first choice. Zero choices is an error, not an empty string.
    fn into_result(self) -> Result<CompletionResult, LlmError> {
        let choice = self.choices.into_iter().next().ok_or(LlmError::EmptyChoices)?;

        let created = self
            .created
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);

        Ok(CompletionResult {
            text: choice.message.content.unwrap_or_default(),
            metadata: CompletionMetadata {
                model: self.model.unwrap_or_else(|| MODEL.to_string()),
                usage: self.usage,
                created,
            },
        })
    }
}

/// Anything that can turn a prompt into a completion.
///
/// Carried in `AppState` as `Arc<dyn Completion>` so handlers can be driven
/// by a stub in tests.
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<CompletionResult, LlmError>;
}

/// Client for the Cerebras chat-completions API (OpenAI-compatible wire format).
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String) -> Result<Self, LlmError> {
        if api_key.trim().is_empty() {
            return Err(LlmError::MissingApiKey);
        }

        Ok(Self {
            client: Client::builder().build()?,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Completion for LlmClient {
    /// Makes exactly one call to the chat-completions endpoint. No retries.
    async fn complete(&self, prompt: &str) -> Result<CompletionResult, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ASSISTANT_SYSTEM,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<UpstreamError>(&body)
                .ok()
                .and_then(|e| e.error.map(|inner| inner.message).or(e.message))
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let result = serde_json::from_str::<ChatResponse>(&body)?.into_result()?;

        debug!(
            "Completion succeeded: model={}, usage={}",
            result.metadata.model, result.metadata.usage
        );

        Ok(result)
    }
}
