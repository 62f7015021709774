// src/llm/response.rs
// Parse the model's PATTERN/EXPLANATION/EXAMPLES reply

use crate::pattern::GenerationResult;

const PATTERN_PREFIX: &str = "PATTERN:";
const EXPLANATION_PREFIX: &str = "EXPLANATION:";
const EXAMPLES_PREFIX: &str = "EXAMPLES:";

/// Parse a raw completion. Unrecognized lines are ignored, missing fields
/// stay empty, and a repeated prefix overwrites the earlier value.
pub fn parse_response(raw: &str) -> GenerationResult {
    let mut result = GenerationResult::default();

    for line in raw.lines().map(str::trim) {
        if let Some(rest) = line.strip_prefix(PATTERN_PREFIX) {
            result.pattern = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(EXPLANATION_PREFIX) {
            result.explanation = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(EXAMPLES_PREFIX) {
            result.examples = rest
                .split('|')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from)
                .collect();
        }
    }

    result
}
