// src/llm/openai.rs
// OpenAI Chat Completions client (non-streaming)

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use super::http_client::LlmHttpClient;
use super::provider::LlmClient;
use crate::config::Settings;

/// Connect timeout is fixed; the request timeout comes from settings
const CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ResponseChoice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseChoice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Extract the first choice's text from a chat completion body
pub fn parse_completion(response_body: &str) -> Result<(String, Option<Usage>)> {
    let data: ChatResponse = serde_json::from_str(response_body)
        .map_err(|e| anyhow!("Failed to parse chat response: {}", e))?;

    let content = data
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| anyhow!("Chat response contained no message content"))?;

    Ok((content.trim().to_string(), data.usage))
}

pub struct OpenAiClient {
    api_key: String,
    api_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    http: LlmHttpClient,
}

impl OpenAiClient {
    pub fn new(settings: &Settings) -> Self {
        let http = LlmHttpClient::new(
            Duration::from_secs(settings.request_timeout_secs),
            Duration::from_secs(CONNECT_TIMEOUT_SECS),
            settings.max_retries,
        );
        Self {
            api_key: settings.api_key.clone(),
            api_url: format!("{}/chat/completions", settings.api_base.trim_end_matches('/')),
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            http,
        }
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::user(prompt)],
            max_tokens: Some(self.max_tokens),
            temperature: Some(self.temperature),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    fn model_name(&self) -> String {
        self.model.clone()
    }

    #[instrument(skip(self, prompt), fields(request_id, model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();
        let start_time = Instant::now();
        Span::current().record("request_id", &request_id);

        let body = serde_json::to_string(&self.build_request(prompt))?;
        debug!(request_id = %request_id, "chat request: {}", body);

        let response_body = self
            .http
            .post_json_with_retry(&request_id, &self.api_url, &self.api_key, body)
            .await?;
        let (content, usage) = parse_completion(&response_body)?;

        if let Some(u) = usage {
            info!(
                request_id = %request_id,
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "usage stats"
            );
        }
        info!(
            request_id = %request_id,
            duration_ms = start_time.elapsed().as_millis() as u64,
            content_len = content.len(),
            "chat complete"
        );

        Ok(content)
    }
}
