//! Console rendering with ANSI colors
//!
//! Human-readable output only; everything here returns strings so main
//! decides where they go.

use crate::generator::{Generated, Outcome, SampleTest, Source};

/// ANSI escape codes
pub mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
}

use ansi::*;

pub fn success(msg: &str) -> String {
    format!("{}{}{}", GREEN, msg, RESET)
}

pub fn error(msg: &str) -> String {
    format!("{}{}{}", RED, msg, RESET)
}

pub fn warning(msg: &str) -> String {
    format!("{}{}{}", YELLOW, msg, RESET)
}

pub fn header(msg: &str) -> String {
    format!("{}{}{}", BOLD, msg, RESET)
}

/// Highlighted regex text (bold cyan)
pub fn regex(pattern: &str) -> String {
    format!("{}{}{}{}", BOLD, CYAN, pattern, RESET)
}

/// Horizontal rule
pub fn separator(ch: char, width: usize) -> String {
    format!("{}{}{}", DIM, ch.to_string().repeat(width), RESET)
}

pub fn banner() -> String {
    format!(
        "{}{}RegexAI - English to Regex Generator{}\n{}",
        BOLD,
        MAGENTA,
        RESET,
        separator('=', 40)
    )
}

/// Hint shown when no API key could be found
pub fn missing_credential_hint() -> String {
    warning("Create a .env file with: OPENAI_API_KEY=your_key_here")
}

/// Render a generation outcome
pub fn render(description: &str, outcome: &Outcome) -> String {
    let mut out = Vec::new();

    match outcome {
        Outcome::DryRun { prompt } => {
            out.push(header("Prompt that would be sent to AI:"));
            out.push(String::new());
            out.push("=".repeat(50));
            out.push(prompt.clone());
            out.push("=".repeat(50));
        }
        Outcome::Generated(generated) => {
            if generated.source == Source::Model {
                out.push(generating_line(description));
            }
            render_generated(generated, &mut out);
        }
        Outcome::Failed(e) => {
            out.push(generating_line(description));
            out.push(error(&capitalize(&e.to_string())));
        }
    }

    out.join("\n")
}

fn generating_line(description: &str) -> String {
    format!("Generating regex for: {}", description)
}

fn render_generated(generated: &Generated, out: &mut Vec<String>) {
    let result = &generated.result;

    out.push(String::new());
    out.push(header("Generated Regex:"));
    out.push(format!("   {}", regex(&result.pattern)));

    if !result.explanation.is_empty() {
        out.push(String::new());
        out.push(header("Explanation:"));
        out.push(format!("   {}", result.explanation));
    }

    if !result.examples.is_empty() {
        out.push(String::new());
        out.push(header("Example matches:"));
        for example in &result.examples {
            out.push(format!("   - {}", example));
        }
    }

    if generated.source == Source::Catalog {
        out.push(success("Found in common patterns database!"));
    }

    if let Some(test) = &generated.test {
        render_test(test, out);
    }

    if let Some(lines) = &generated.breakdown {
        out.push(String::new());
        out.push(header("Pattern Breakdown:"));
        out.push(format!("   Pattern: {}", result.pattern));
        for line in lines {
            out.push(format!("   - {}", line));
        }
    }
}

fn render_test(test: &SampleTest, out: &mut Vec<String>) {
    out.push(String::new());
    out.push(header(&format!("Testing: '{}'", test.sample)));

    match &test.outcome {
        Ok(outcome) if outcome.matched => {
            out.push(format!("   {}", success("Match found!")));
            if !outcome.groups.is_empty() {
                out.push(format!("   Captured groups: {:?}", outcome.groups));
            }
            out.push(format!("   Matched text: '{}'", outcome.matched_text));
        }
        Ok(_) => out.push(format!("   {}", error("No match found"))),
        Err(e) => out.push(format!("   {}", error(&capitalize(&e.to_string())))),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RegexAiError;
    use crate::pattern::{GenerationResult, TestOutcome};

    fn generated(source: Source) -> Generated {
        Generated {
            source,
            result: GenerationResult {
                pattern: r"^(\d{3})-\d{4}$".into(),
                explanation: "Seven digit local numbers".into(),
                examples: vec!["555-1234".into()],
            },
            test: None,
            breakdown: None,
        }
    }

    #[test]
    fn test_banner() {
        let banner = banner();
        assert!(banner.contains("RegexAI - English to Regex Generator"));
        assert!(banner.contains(&"=".repeat(40)));
    }

    #[test]
    fn test_render_dry_run() {
        let text = render("x", &Outcome::DryRun { prompt: "PROMPT BODY".into() });
        assert!(text.contains("Prompt that would be sent to AI:"));
        assert!(text.contains("PROMPT BODY"));
        assert_eq!(text.matches(&"=".repeat(50)).count(), 2);
    }

    #[test]
    fn test_render_catalog_hit() {
        let text = render("phones", &Outcome::Generated(generated(Source::Catalog)));
        assert!(text.contains("Generated Regex:"));
        assert!(text.contains(r"^(\d{3})-\d{4}$"));
        assert!(text.contains("Seven digit local numbers"));
        assert!(text.contains("   - 555-1234"));
        assert!(text.contains("Found in common patterns database!"));
        assert!(!text.contains("Generating regex for"));
    }

    #[test]
    fn test_render_model_result_with_test_and_breakdown() {
        let mut g = generated(Source::Model);
        g.test = Some(SampleTest {
            sample: "555-1234".into(),
            outcome: Ok(TestOutcome {
                matched: true,
                groups: vec!["555".into()],
                matched_text: "555-1234".into(),
            }),
        });
        g.breakdown = Some(vec!["^ = Start of string".into()]);

        let text = render("local numbers", &Outcome::Generated(g));
        assert!(text.starts_with("Generating regex for: local numbers"));
        assert!(text.contains("Testing: '555-1234'"));
        assert!(text.contains("Match found!"));
        assert!(text.contains(r#"Captured groups: ["555"]"#));
        assert!(text.contains("Matched text: '555-1234'"));
        assert!(text.contains("Pattern Breakdown:"));
        assert!(text.contains("   - ^ = Start of string"));
        assert!(!text.contains("common patterns database"));
    }

    #[test]
    fn test_render_no_match_and_invalid_pattern() {
        let mut g = generated(Source::Model);
        g.test = Some(SampleTest {
            sample: "nope".into(),
            outcome: Ok(TestOutcome::default()),
        });
        assert!(render("x", &Outcome::Generated(g)).contains("No match found"));

        let mut g = generated(Source::Model);
        let source = fancy_regex::Regex::new("(").unwrap_err();
        g.test = Some(SampleTest {
            sample: "abc".into(),
            outcome: Err(RegexAiError::InvalidPattern {
                pattern: "(".into(),
                source,
            }),
        });
        assert!(render("x", &Outcome::Generated(g)).contains("Invalid regex pattern"));
    }

    #[test]
    fn test_render_failed() {
        let text = render("x", &Outcome::Failed(RegexAiError::GenerationFailed));
        assert!(text.contains("Failed to generate valid regex pattern"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("error here"), "Error here");
        assert_eq!(capitalize(""), "");
    }
}
