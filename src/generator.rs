// src/generator.rs
// Catalog lookup, model call, parse, test, and explain in one pass

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{RegexAiError, Result};
use crate::llm::{LlmClient, build_prompt, parse_response};
use crate::pattern::{GenerationResult, TestOutcome, catalog, explain_pattern, test_pattern};

/// Where a generated pattern came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Catalog,
    Model,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Sample string to search with the generated pattern
    pub test_input: Option<String>,
    /// Stop before calling the model and return the prompt
    pub dry_run: bool,
    /// Include a meta-character breakdown
    pub explain: bool,
}

/// Test report for one sample
#[derive(Debug)]
pub struct SampleTest {
    pub sample: String,
    pub outcome: Result<TestOutcome>,
}

#[derive(Debug)]
pub struct Generated {
    pub source: Source,
    pub result: GenerationResult,
    pub test: Option<SampleTest>,
    pub breakdown: Option<Vec<String>>,
}

#[derive(Debug)]
pub enum Outcome {
    DryRun { prompt: String },
    Generated(Generated),
    /// The model call failed or returned no usable pattern
    Failed(RegexAiError),
}

pub struct Generator {
    client: Arc<dyn LlmClient>,
}

impl Generator {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Generate a regex for `description`.
    ///
    /// A catalog hit skips the model unless this is a dry run, in which case
    /// the prompt is returned without any model call.
    pub async fn generate(&self, description: &str, options: &GenerateOptions) -> Outcome {
        if !options.dry_run {
            if let Some(record) = catalog::lookup(description) {
                info!(key = record.key, "found in common patterns");
                return Outcome::Generated(finish(Source::Catalog, record.to_result(), options));
            }
        }

        let prompt = build_prompt(description);
        if options.dry_run {
            return Outcome::DryRun { prompt };
        }

        info!(model = %self.client.model_name(), "generating regex");
        let raw = match self.client.complete(&prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "model call failed");
                return Outcome::Failed(e.into());
            }
        };
        debug!(raw = %raw, "model response");

        let result = parse_response(&raw);
        if !result.is_usable() {
            warn!("model response had no PATTERN line");
            return Outcome::Failed(RegexAiError::GenerationFailed);
        }

        Outcome::Generated(finish(Source::Model, result, options))
    }
}

fn finish(source: Source, result: GenerationResult, options: &GenerateOptions) -> Generated {
    let test = options.test_input.as_ref().map(|sample| SampleTest {
        sample: sample.clone(),
        outcome: test_pattern(&result.pattern, sample),
    });
    let breakdown = options.explain.then(|| explain_pattern(&result.pattern));

    Generated {
        source,
        result,
        test,
        breakdown,
    }
}
