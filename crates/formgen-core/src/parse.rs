//! Turns raw model text into a candidate JSON value.
//!
//! Guarantees syntactically valid JSON was extracted—nothing more. Shape
//! conformance is the validator's job.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::error::ParseError;
use crate::sanitize::sanitize;

static OBJECT_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("OBJECT_SPAN pattern is valid"));

/// Sanitize `raw` and decode it into an untyped JSON value.
///
/// On a strict decode failure, falls back to the largest `{...}` span of the
/// sanitized text. If that fails too, returns a [`ParseError`] carrying the
/// decode message and the original raw text.
pub fn parse_candidate(raw: &str) -> Result<Value, ParseError> {
    let cleaned = sanitize(raw);

    match serde_json::from_str(&cleaned) {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Some(span) = OBJECT_SPAN.find(&cleaned) {
                if let Ok(value) = serde_json::from_str(span.as_str()) {
                    return Ok(value);
                }
            }
            Err(ParseError {
                message: err.to_string(),
                raw: raw.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_relaxed_json() {
        let raw = "```json\n{title: 'Contact', fields: [{name: 'email', label: 'Email', type: 'email', required: true,}]}\n```";
        let value = parse_candidate(raw).unwrap();
        assert_eq!(value["title"], "Contact");
        assert_eq!(value["fields"][0]["type"], "email");
        assert_eq!(value["fields"][0]["required"], true);
    }

    #[test]
    fn falls_back_to_the_largest_object_span() {
        // The stray bracket after the object defeats strict decoding.
        let raw = "{\"title\": \"Poll\", \"fields\": [{\"name\": \"q\"}]} ]";
        let value = parse_candidate(raw).unwrap();
        assert_eq!(value["title"], "Poll");
    }

    #[test]
    fn prose_without_json_fails_with_the_raw_text_attached() {
        let err = parse_candidate("I cannot help with that.").unwrap_err();
        assert_eq!(err.raw, "I cannot help with that.");
        assert!(!err.message.is_empty());
    }
}
