//! Response parsing — raw model text to ordered reply candidates.
//!
//! Ordered fallback chain, first non-empty result wins:
//!   1. JSON array (whole text, fence-stripped text, outermost `[...]` span)
//!   2. Numbered items ("1. ... 2) ... 3、...")
//!   3. One candidate per non-empty line
//!   4. The whole text as a single candidate
//!
//! Callers keep the first `MAX_SUGGESTIONS`.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::cleaner::{clean_suggestion, strip_code_fence};

/// Item marker: start or whitespace, digit 1-9, delimiter, optional spaces.
static ITEM_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)[1-9][\.、\)）:：]\s*").expect("item marker regex")
});

/// Where a numbered list begins: the "1" item, wherever it sits.
static FIRST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"1[\.、\)）:：]").expect("first item regex"));

type Strategy = fn(&str) -> Option<Vec<String>>;

const STRATEGIES: &[(&str, Strategy)] = &[
    ("json", parse_json_array),
    ("numbered", parse_numbered),
    ("lines", parse_lines),
];

/// Parse raw model output. Never fails; an empty vec only for blank input.
pub fn parse(raw: &str) -> Vec<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Vec::new();
    }

    for (name, strategy) in STRATEGIES {
        if let Some(items) = strategy(text) {
            tracing::debug!(strategy = name, count = items.len(), "Response parsed");
            return items;
        }
    }

    tracing::debug!(strategy = "whole", "Response parsed");
    parse_whole(text)
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub fn parse_json_array(text: &str) -> Option<Vec<String>> {
    let mut candidates = vec![text.to_string()];
    let unfenced = strip_code_fence(text);
    if unfenced != text {
        candidates.push(unfenced);
    }
    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if start < end {
            candidates.push(text[start..=end].to_string());
        }
    }

    candidates.iter().find_map(|candidate| {
        let values: Vec<Value> = serde_json::from_str(candidate).ok()?;
        non_empty(
            values
                .iter()
                .filter_map(value_text)
                .map(|s| clean_suggestion(&s))
                .filter(|s| !s.is_empty())
                .collect(),
        )
    })
}

/// Drop any prose before the first numbered item.
fn strip_leading_prose(text: &str) -> &str {
    match FIRST_ITEM.find(text) {
        Some(m) => &text[m.start()..],
        None => text,
    }
}

pub fn parse_numbered(text: &str) -> Option<Vec<String>> {
    let body = strip_leading_prose(text);
    let markers: Vec<_> = ITEM_MARKER.find_iter(body).collect();

    let items = markers
        .iter()
        .enumerate()
        .map(|(i, m)| {
            let end = markers.get(i + 1).map_or(body.len(), |next| next.start());
            clean_suggestion(&body[m.end()..end])
        })
        .filter(|s| !s.is_empty())
        .collect();
    non_empty(items)
}

pub fn parse_lines(text: &str) -> Option<Vec<String>> {
    non_empty(
        text.lines()
            .map(clean_suggestion)
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

fn parse_whole(text: &str) -> Vec<String> {
    let cleaned = clean_suggestion(text);
    if cleaned.is_empty() {
        Vec::new()
    } else {
        vec![cleaned]
    }
}
