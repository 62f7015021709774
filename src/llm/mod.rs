// src/llm/mod.rs
// Model collaborator: prompt, client, and response parsing

mod http_client;
pub mod openai;
pub mod prompt;
mod provider;
pub mod response;

pub use openai::OpenAiClient;
pub use prompt::build_prompt;
pub use provider::LlmClient;
pub use response::parse_response;
