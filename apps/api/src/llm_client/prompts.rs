// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies. \
    Use exactly the keys of the requested schema, no more and no fewer.";

/// Builds a system instruction from a role description plus the JSON-only rules.
pub fn json_system(role: &str) -> String {
    format!("{role} {JSON_ONLY_SYSTEM}")
}

/// Substitutes `{key}` placeholders in one left-to-right pass.
/// Substituted values are never rescanned, so user text that happens to
/// contain `{answer}` or `{resume}` stays literal. Unknown braces are kept.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find(|(key, _)| {
            tail.strip_prefix(*key)
                .is_some_and(|after| after.starts_with('}'))
        });
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Collapses user-supplied text so it cannot break out of a quoted prompt slot.
pub fn quote_user_text(text: &str) -> String {
    text.trim().replace('"', "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_system_appends_rules() {
        let system = json_system("You are an interviewer.");
        assert!(system.starts_with("You are an interviewer."));
        assert!(system.contains("valid JSON only"));
    }

    #[test]
    fn test_fill_template_substitutes_each_placeholder() {
        let filled = fill_template(
            "Q: {question} A: {answer} {\"k\": 1}",
            &[("question", "why"), ("answer", "because")],
        );
        assert_eq!(filled, "Q: why A: because {\"k\": 1}");
    }

    #[test]
    fn test_fill_template_leaves_placeholders_inside_values_alone() {
        let filled = fill_template("{a}|{b}", &[("a", "x {b} y"), ("b", "SECRET")]);
        assert_eq!(filled, "x {b} y|SECRET");
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unclosed_braces() {
        assert_eq!(fill_template("{nope} {a", &[("a", "1")]), "{nope} {a");
    }

    #[test]
    fn test_quote_user_text_replaces_double_quotes() {
        assert_eq!(quote_user_text("  I said \"hi\"  "), "I said 'hi'");
    }
}
