// src/pattern/mod.rs
// Pattern catalog, testing, and explanation

pub mod catalog;
pub mod explainer;
pub mod tester;

pub use catalog::{CATALOG, PatternRecord, lookup};
pub use explainer::explain_pattern;
pub use tester::{TestOutcome, test_pattern};

/// A generated pattern with its explanation and example matches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub pattern: String,
    pub explanation: String,
    pub examples: Vec<String>,
}

impl GenerationResult {
    /// An empty pattern means generation failed
    pub fn is_usable(&self) -> bool {
        !self.pattern.is_empty()
    }
}
