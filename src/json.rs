//! Recovering JSON from free-form LLM replies.
//!
//! Models wrap JSON in markdown fences, prepend chatter, or trail off with an
//! explanation. These helpers cut out the first balanced object or array so
//! serde only ever sees the payload.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;

/// Removes every markdown code fence marker (```json and ```).
pub fn strip_code_fences(text: &str) -> String {
    text.trim().replace("```json", "").replace("```JSON", "").replace("```", "")
}

/// Returns the first balanced span opened by `open` and closed by `close`,
/// ignoring delimiters that appear inside JSON strings.
pub fn find_balanced(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                let end = start + offset + c.len_utf8();
                return Some(&text[start..end]);
            }
        }
    }

    None
}

/// Fallback when the balanced scan fails (e.g. an unterminated string):
/// everything from the first `open` to the last `close`.
fn outermost_span(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

fn extract_span(response: &str, open: char, close: char) -> Option<String> {
    let cleaned = strip_code_fences(response);
    find_balanced(&cleaned, open, close)
        .or_else(|| outermost_span(&cleaned, open, close))
        .map(str::to_string)
}

pub fn extract_json_object(response: &str) -> Option<String> {
    extract_span(response, '{', '}')
}

pub fn extract_json_array(response: &str) -> Option<String> {
    extract_span(response, '[', ']')
}

/// Parses the first JSON object found in an LLM reply.
pub fn parse_json_object<T: DeserializeOwned>(response: &str) -> Result<T> {
    let json = extract_json_object(response).ok_or_else(|| anyhow!("No JSON found in response"))?;
    serde_json::from_str(&json).map_err(|e| anyhow!("Failed to parse JSON response: {}", e))
}

/// Parses the first JSON array found in an LLM reply.
pub fn parse_json_array<T: DeserializeOwned>(response: &str) -> Result<T> {
    let json =
        extract_json_array(response).ok_or_else(|| anyhow!("No JSON array found in response"))?;
    serde_json::from_str(&json).map_err(|e| anyhow!("Failed to parse JSON response: {}", e))
}

/// First `max` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_fenced_object() {
        let reply = "```json\n{\"title\": \"A\", \"examples\": [\"x\"]}\n```";
        let value: Value = parse_json_object(reply).unwrap();
        assert_eq!(value["title"], "A");
    }

    #[test]
    fn test_object_with_surrounding_prose() {
        let reply = "Sure! Here it is: {\"a\": {\"b\": \"}\"}} Hope that helps {not json}";
        assert_eq!(
            extract_json_object(reply).as_deref(),
            Some("{\"a\": {\"b\": \"}\"}}")
        );
    }

    #[test]
    fn test_escaped_quotes_inside_strings() {
        let reply = r#"{"description": "He said \"{hi}\" twice"}"#;
        let value: Value = parse_json_object(reply).unwrap();
        assert_eq!(value["description"], "He said \"{hi}\" twice");
    }

    #[test]
    fn test_array_extraction() {
        let reply = "Quiz below\n[{\"question\": \"q\"}, {\"question\": \"r\"}]\nDone.";
        let value: Vec<Value> = parse_json_array(reply).unwrap();
        assert_eq!(value.len(), 2);
    }

    #[test]
    fn test_missing_json() {
        assert!(parse_json_object::<Value>("no braces here").is_err());
        assert!(parse_json_array::<Value>("{}").is_err());
    }

    #[test]
    fn test_truncate_chars_respects_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }
}
