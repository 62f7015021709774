// src/pattern/explainer.rs
// Best-effort lexical hints for regex meta-characters
//
// This is a substring scan over the pattern text, not a parse: an escaped
// `\+` still reports "+", and `\d` inside a class still reports "any digit".

/// Checklist order is output order. Each entry lists the substrings that
/// must all be present.
const HINTS: [(&[&str], &str); 9] = [
    (&["^"], "^ = Start of string"),
    (&["$"], "$ = End of string"),
    (&["+"], "+ = One or more of preceding element"),
    (&["*"], "* = Zero or more of preceding element"),
    (&["?"], "? = Zero or one of preceding element"),
    (&["[", "]"], "[] = Character class (match any character inside)"),
    (&[r"\d"], r"\d = Any digit (0-9)"),
    (&[r"\w"], r"\w = Any word character (a-z, A-Z, 0-9, _)"),
    (&[r"\s"], r"\s = Any whitespace character"),
];

/// One line per meta-character type present in `pattern`, in checklist order
pub fn explain_pattern(pattern: &str) -> Vec<String> {
    HINTS
        .iter()
        .filter(|(needles, _)| needles.iter().all(|n| pattern.contains(n)))
        .map(|(_, line)| line.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has(lines: &[String], prefix: &str) -> bool {
        lines.iter().any(|l| l.starts_with(prefix))
    }

    #[test]
    fn test_email_pattern_breakdown() {
        let lines = explain_pattern(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$");
        assert!(has(&lines, "^ ="));
        assert!(has(&lines, "$ ="));
        assert!(has(&lines, "+ ="));
        assert!(has(&lines, "[] ="));
        assert!(!has(&lines, r"\d ="));
        assert!(!has(&lines, r"\w ="));
        assert!(!has(&lines, r"\s ="));
    }

    #[test]
    fn test_checklist_order() {
        let lines = explain_pattern(r"\s*\d+^$");
        let prefixes: Vec<&str> = lines.iter().map(|l| l.split(" = ").next().unwrap()).collect();
        assert_eq!(prefixes, vec!["^", "$", "+", "*", r"\d", r"\s"]);
    }

    #[test]
    fn test_duplicates_reported_once() {
        let lines = explain_pattern("a+b+c+");
        assert_eq!(lines, vec!["+ = One or more of preceding element".to_string()]);
    }

    #[test]
    fn test_class_needs_both_brackets() {
        assert!(explain_pattern("[abc").is_empty());
        assert_eq!(explain_pattern("[abc]").len(), 1);
    }

    #[test]
    fn test_lexical_not_semantic() {
        // escaped plus and \d inside a class are still reported
        let lines = explain_pattern(r"[\d]\+");
        assert!(has(&lines, "+ ="));
        assert!(has(&lines, r"\d ="));
    }

    #[test]
    fn test_plain_literal_has_no_hints() {
        assert!(explain_pattern("hello").is_empty());
        assert!(explain_pattern("").is_empty());
    }
}
