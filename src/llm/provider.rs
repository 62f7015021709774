// src/llm/provider.rs
// LLM client abstraction so generation can run without a network

use anyhow::Result;
use async_trait::async_trait;

/// Anything that can turn a prompt into a text completion
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a single prompt and return the completion text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging
    fn model_name(&self) -> String;
}
