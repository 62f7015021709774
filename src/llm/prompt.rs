// src/llm/prompt.rs
// Prompt sent to the model for regex generation

/// Build the generation prompt for a description.
///
/// No validation: an empty description yields a prompt with empty slots.
pub fn build_prompt(description: &str) -> String {
    format!(
        r#"You are a regex expert. Generate a precise, production-ready regular expression for: "{description}"
Requirements:
- Must be accurate and handle common edge cases
- Should be efficient (avoid catastrophic backtracking)
- Use standard regex syntax that works across languages
- Focus on practical, real-world usage

Respond in this EXACT format:
PATTERN: [the regex pattern only]
EXPLANATION: [clear explanation of what it matches]
EXAMPLES: [3-5 realistic examples separated by |]

Common reference patterns:
- Email: ^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{{2,}}$
- Phone: ^\+?[1-9]\d{{1,14}}$
- URL: ^https?:\/\/[^\s]+$
- IPv4: ^(?:[0-9]{{1,3}}\.){{3}}[0-9]{{1,3}}$
- Date (MM/DD/YYYY): ^(0[1-9]|1[0-2])\/(0[1-9]|[12][0-9]|3[01])\/\d{{4}}$

Generate for: {description}"#
    )
}
