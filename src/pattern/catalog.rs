// src/pattern/catalog.rs
// Built-in patterns for common topics, matched by keyword

use super::GenerationResult;

/// A canned regex for a common topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRecord {
    pub key: &'static str,
    pub pattern: &'static str,
    pub explanation: &'static str,
    pub examples: &'static [&'static str],
}

impl PatternRecord {
    /// Whether a lower-cased description refers to this record's topic
    fn matches(&self, description_lower: &str) -> bool {
        description_lower.contains(self.key)
            || KEY_VARIANTS
                .iter()
                .any(|suffix| description_lower.contains(&format!("{}{}", self.key, suffix)))
    }

    /// Copy into an owned generation result for display
    pub fn to_result(&self) -> GenerationResult {
        GenerationResult {
            pattern: self.pattern.to_string(),
            explanation: self.explanation.to_string(),
            examples: self.examples.iter().map(|e| e.to_string()).collect(),
        }
    }
}

const KEY_VARIANTS: [&str; 4] = [" address", " addresses", " number", " numbers"];

/// Lookup order is the declaration order; the first matching key wins.
pub static CATALOG: [PatternRecord; 5] = [
    PatternRecord {
        key: "email",
        pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$",
        explanation: "Matches standard email addresses with alphanumeric characters, dots, underscores, plus signs and hyphens",
        examples: &["user@example.com", "test.email+tag@domain.co.uk", "simple@test.org"],
    },
    PatternRecord {
        key: "phone",
        pattern: r"^\+?[1-9]\d{1,14}$",
        explanation: "Matches international phone numbers with optional plus sign and 2-15 digits",
        examples: &["+1234567890", "1234567890", "+441234567890"],
    },
    PatternRecord {
        key: "url",
        pattern: r"^https?://[^\s]+$",
        explanation: "Matches HTTP and HTTPS URLs",
        examples: &["https://example.com", "http://test.org/path", "https://sub.domain.com/page?query=value"],
    },
    PatternRecord {
        key: "ip",
        pattern: r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$",
        explanation: "Matches IPv4 addresses (basic format validation)",
        examples: &["192.168.1.1", "10.0.0.1", "172.16.254.1"],
    },
    PatternRecord {
        key: "date",
        pattern: r"^(0[1-9]|1[0-2])/(0[1-9]|[12][0-9]|3[01])/\d{4}$",
        explanation: "Matches dates in MM/DD/YYYY format",
        examples: &["01/15/2024", "12/31/2023", "06/08/1990"],
    },
];

/// Find the built-in pattern for a free-text description.
///
/// Plain substring matching on the lower-cased description, so short keys
/// like `ip` also hit inside longer words ("zip code").
pub fn lookup(description: &str) -> Option<&'static PatternRecord> {
    let description_lower = description.to_lowercase();
    CATALOG.iter().find(|record| record.matches(&description_lower))
}

/// Topic keys in lookup order
pub fn keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|record| record.key)
}
