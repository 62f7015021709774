//! Configuration for regexai
//!
//! Values resolve as: CLI flags > environment (via clap) > ~/.regexai/config.toml > defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{RegexAiError, Result};

pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_MAX_TOKENS: u32 = 400;
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Optional values read from the config file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Chat model identifier
    pub model: Option<String>,

    pub max_tokens: Option<u32>,

    pub temperature: Option<f32>,

    /// Base URL of an OpenAI-compatible API
    pub api_base: Option<String>,

    pub request_timeout_secs: Option<u64>,

    /// Retries for rate limits, server errors, and connect failures
    pub max_retries: Option<u32>,
}

impl Config {
    /// Load config from ~/.regexai/config.toml, falling back to defaults
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RegexAiError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            RegexAiError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Fill in everything the CLI left unset. The API key is required.
    pub fn resolve(self, api_key: Option<String>, model: Option<String>) -> Result<Settings> {
        let api_key = api_key
            .or(self.openai_api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or(RegexAiError::MissingCredential)?;

        Ok(Settings {
            api_key,
            model: model
                .or(self.model)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            api_base: self
                .api_base
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            request_timeout_secs: self
                .request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        })
    }
}

/// Fully resolved settings for the model client
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_base: String,
    pub request_timeout_secs: u64,
    pub max_retries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Directory holding config.toml and an optional .env
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".regexai")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
