//! Response normalization: turns raw model text into something worth handing
//! to a JSON parser.
//!
//! Order: trim → strip a surrounding code fence (with or without a language
//! tag) → if the text still does not open with `{`, slice from the first `{`
//! to the last `}` inclusive.

use serde_json::{Map, Value};

/// Normalizes a model response. Never fails; returns the best candidate slice.
pub fn normalize_response(raw: &str) -> &str {
    let text = strip_code_fence(raw.trim());
    if text.starts_with('{') {
        return text;
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end >= start => &text[start..=end],
        _ => text,
    }
}

/// Strips a ```` ``` ```` fence that wraps the whole text. The fence is only
/// removed when both the opening and closing markers are present.
fn strip_code_fence(text: &str) -> &str {
    const FENCE: &str = "```";
    if text.len() < 2 * FENCE.len() || !text.starts_with(FENCE) || !text.ends_with(FENCE) {
        return text;
    }

    let inner = &text[FENCE.len()..text.len() - FENCE.len()];
    let tag_len = inner
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+')))
        .unwrap_or(inner.len());
    let (tag, rest) = inner.split_at(tag_len);

    if !tag.is_empty() && rest.starts_with(char::is_whitespace) {
        rest.trim()
    } else {
        inner.trim()
    }
}

/// Strict parse: succeeds only for a JSON object.
pub fn parse_object(text: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(format!("expected a JSON object, got {}", kind_of(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
