// src/lib.rs
// regexai - English descriptions to regular expressions

pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod llm;
pub mod pattern;

pub use error::{RegexAiError, Result};
pub use generator::{GenerateOptions, Generator, Outcome, Source};
