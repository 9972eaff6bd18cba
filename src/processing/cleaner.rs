//! Fragment cleaning for model output.

use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+[\).、:：\s]*").expect("numbering regex"));

static FENCE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```[a-zA-Z]*").expect("fence regex"));

/// Quote, bracket and space characters peeled off both ends of a suggestion.
const WRAPPER_CHARS: &[char] = &['"', '\'', '[', ']', '“', '”', '‘', '’', ' '];

/// Normalize one raw suggestion fragment.
///
/// Trims, unescapes literal `\n` and `\"`, drops a leading `1.` / `2)` / `3、`
/// style prefix, then peels quotes and brackets from both ends.
/// Returns an empty string when nothing is left.
pub fn clean_suggestion(raw: &str) -> String {
    let unescaped = raw.trim().replace("\\n", " ").replace("\\\"", "\"");
    let unnumbered = LEADING_NUMBERING.replace(&unescaped, "");
    unnumbered.trim_matches(WRAPPER_CHARS).trim().to_string()
}

/// Remove a surrounding Markdown code fence (```json ... ```), if any.
pub fn strip_code_fence(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let without_open = FENCE_OPEN.replace(trimmed, "");
    let body = without_open.trim();
    body.strip_suffix("```").unwrap_or(body).trim().to_string()
}
