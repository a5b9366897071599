//! Field-level extraction used when a response is not valid JSON.
//!
//! Each extractor is independent: a miss on one field never affects another.
//! An empty capture (`"Field": ""` or `"Field": []`) counts as a miss, so the
//! caller's default applies.

use std::sync::LazyLock;

use regex::Regex;

static QUOTED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

static TWO_CAPITALIZED_WORDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]+ [A-Z][a-z]+)").unwrap());

/// How far into a resume the name scan looks, in characters.
const NAME_SCAN_CHARS: usize = 500;

/// Extracts `value` from `"field": "value"`.
pub fn extract_field(text: &str, field: &str) -> Option<String> {
    let pattern = format!(r#""{}"\s*:\s*"([^"]*)""#, regex::escape(field));
    let re = Regex::new(&pattern).ok()?;
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|value| !value.is_empty())
}

/// Extracts every quoted item from `"field": [ ... ]`. The list may span lines.
pub fn extract_list(text: &str, field: &str) -> Option<Vec<String>> {
    let pattern = format!(r#"(?s)"{}"\s*:\s*\[(.*?)\]"#, regex::escape(field));
    let re = Regex::new(&pattern).ok()?;
    let body = re.captures(text)?.get(1)?.as_str();

    let items: Vec<String> = QUOTED_ITEM
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

/// First "Firstname Lastname" shaped pair within the opening characters of a resume.
pub fn guess_candidate_name(resume_text: &str) -> Option<String> {
    let head = match resume_text.char_indices().nth(NAME_SCAN_CHARS) {
        Some((idx, _)) => &resume_text[..idx],
        None => resume_text,
    };
    TWO_CAPITALIZED_WORDS
        .captures(head)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// First email address anywhere in the text.
pub fn find_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}
