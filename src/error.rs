// src/error.rs
// Error kinds for regex generation

use thiserror::Error;

/// Main error type for the regexai library
#[derive(Error, Debug)]
pub enum RegexAiError {
    #[error("OPENAI_API_KEY not found in environment")]
    MissingCredential,

    #[error("invalid regex pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: fancy_regex::Error,
    },

    #[error("failed to generate valid regex pattern")]
    GenerationFailed,

    #[error("error generating regex: {0}")]
    Transport(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Result using RegexAiError
pub type Result<T> = std::result::Result<T, RegexAiError>;

impl RegexAiError {
    /// Only a missing credential stops the process; everything else is reported
    pub fn is_fatal(&self) -> bool {
        matches!(self, RegexAiError::MissingCredential)
    }
}

impl From<anyhow::Error> for RegexAiError {
    fn from(err: anyhow::Error) -> Self {
        RegexAiError::Transport(format!("{:#}", err))
    }
}
