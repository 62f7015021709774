// src/pattern/tester.rs
// Run a candidate regex against a sample string

use tracing::debug;

use crate::error::{RegexAiError, Result};

/// Result of searching a sample with a pattern
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestOutcome {
    pub matched: bool,
    /// Capture groups 1..n; a group that did not participate is an empty string
    pub groups: Vec<String>,
    pub matched_text: String,
}

/// Compiled pattern: the linear-time engine when it accepts the syntax,
/// the backtracking engine for lookaround and backreferences.
enum Compiled {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Compiled {
    fn new(pattern: &str) -> Result<Self> {
        match regex::Regex::new(pattern) {
            Ok(re) => Ok(Self::Basic(re)),
            Err(e) => {
                debug!(pattern, error = %e, "falling back to fancy_regex");
                fancy_regex::Regex::new(pattern)
                    .map(Self::Fancy)
                    .map_err(|source| invalid(pattern, source))
            }
        }
    }

    /// Leftmost match as (whole match, groups 1..n)
    fn first_match(&self, pattern: &str, sample: &str) -> Result<Option<(String, Vec<String>)>> {
        match self {
            Self::Basic(re) => Ok(re.captures(sample).map(|caps| {
                let mut slots = caps.iter().map(|g| g.map(|m| m.as_str()));
                collect(&mut slots)
            })),
            Self::Fancy(re) => {
                let caps = re.captures(sample).map_err(|source| invalid(pattern, source))?;
                Ok(caps.map(|caps| {
                    let mut slots = caps.iter().map(|g| g.map(|m| m.as_str()));
                    collect(&mut slots)
                }))
            }
        }
    }
}

fn invalid(pattern: &str, source: fancy_regex::Error) -> RegexAiError {
    RegexAiError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    }
}

fn collect<'a>(slots: &mut dyn Iterator<Item = Option<&'a str>>) -> (String, Vec<String>) {
    let whole = slots.next().flatten().unwrap_or_default().to_string();
    let groups = slots.map(|g| g.unwrap_or_default().to_string()).collect();
    (whole, groups)
}

/// Search `sample` for the first match of `pattern` (not a full match).
pub fn test_pattern(pattern: &str, sample: &str) -> Result<TestOutcome> {
    let re = Compiled::new(pattern)?;

    let Some((matched_text, groups)) = re.first_match(pattern, sample)? else {
        debug!(pattern, "no match");
        return Ok(TestOutcome::default());
    };

    Ok(TestOutcome {
        matched: true,
        groups,
        matched_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_match_without_groups() {
        let outcome = test_pattern("^[a-z]+$", "abc").unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.matched_text, "abc");
        assert!(outcome.groups.is_empty());
    }

    #[test]
    fn test_search_finds_first_occurrence() {
        let outcome = test_pattern(r"\d+", "call 555 or 777").unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.matched_text, "555");
    }

    #[test]
    fn test_captured_groups() {
        let outcome = test_pattern(r"(\d{3})-(\d{4})", "tel: 555-1234").unwrap();
        assert_eq!(outcome.groups, vec!["555", "1234"]);
        assert_eq!(outcome.matched_text, "555-1234");
    }

    #[test]
    fn test_non_participating_group_is_empty() {
        let outcome = test_pattern(r"(a)|(b)", "b").unwrap();
        assert_eq!(outcome.groups, vec!["".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_no_match() {
        let outcome = test_pattern(r"^\+?[1-9]\d{1,14}$", "(555) 123-4567").unwrap();
        assert!(!outcome.matched);
        assert!(outcome.groups.is_empty());
        assert!(outcome.matched_text.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_error() {
        let err = test_pattern("(", "abc").unwrap_err();
        match err {
            RegexAiError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    // ========================================================================
    // Backtracking fallback
    // ========================================================================

    #[test]
    fn test_lookahead_pattern_is_supported() {
        let password = r"^(?=.*[A-Z])(?=.*\d).{8,}$";
        let outcome = test_pattern(password, "Passw0rdXY").unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.matched_text, "Passw0rdXY");
        assert!(outcome.groups.is_empty());

        assert!(!test_pattern(password, "password").unwrap().matched);
    }

    #[test]
    fn test_backreference_pattern_is_supported() {
        let outcome = test_pattern(r"(\w)\1", "hello").unwrap();
        assert!(outcome.matched);
        assert_eq!(outcome.matched_text, "ll");
        assert_eq!(outcome.groups, vec!["l"]);
    }

    #[test]
    fn test_pattern_rejected_by_both_engines_is_error() {
        let err = test_pattern(r"(?=a", "ab").unwrap_err();
        assert!(matches!(err, RegexAiError::InvalidPattern { .. }));
    }
}
