//! Best-effort textual repair of raw model output.
//!
//! Model replies nominally contain JSON but routinely arrive wrapped in
//! markdown fences, prefixed with prose, or written in relaxed syntax
//! (trailing commas, bare keys, single quotes). [`sanitize`] normalizes all
//! of that into something a strict JSON decoder has a fighting chance with.
//!
//! This is a textual normalizer, not a parser: it never fails, it only
//! transforms. Whether the result actually decodes is the parser's problem.

use std::sync::LazyLock;

use regex::Regex;

static FENCE_JSON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```json\s*").expect("FENCE_JSON pattern is valid"));
static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```\s*").expect("FENCE pattern is valid"));
static JSON_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[{\[]").expect("JSON_START pattern is valid"));
static TRAILING_COMMA_OBJ: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\}").expect("TRAILING_COMMA_OBJ pattern is valid"));
static TRAILING_COMMA_ARR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*\]").expect("TRAILING_COMMA_ARR pattern is valid"));
static BARE_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([{,]\s*)(\w+):").expect("BARE_KEY pattern is valid"));
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*'([^']*)'").expect("SINGLE_QUOTED pattern is valid"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN pattern is valid"));

/// Strip conversational wrapping and repair common JSON syntax defects.
///
/// Steps, each operating on the output of the previous:
/// 1. remove code fences (with or without a `json` language tag);
/// 2. trim;
/// 3. drop everything before the first line starting with `{` or `[`;
/// 4. drop everything after the last `}` or `]`;
/// 5. remove trailing commas before a closing brace/bracket;
/// 6. double-quote bare object keys;
/// 7. convert single-quoted string values to double-quoted;
/// 8. collapse whitespace runs to single spaces.
///
/// Total function; input without JSON markers passes through steps 3–4
/// unchanged.
pub fn sanitize(raw: &str) -> String {
    let text = FENCE_JSON.replace_all(raw, "");
    let text = FENCE.replace_all(&text, "");
    let mut text = text.trim().to_string();

    if let Some(m) = JSON_START.find(&text) {
        text = text[m.start()..].to_string();
    }
    if let Some(end) = text.rfind(['}', ']']) {
        text.truncate(end + 1);
    }

    let text = TRAILING_COMMA_OBJ.replace_all(&text, "}");
    let text = TRAILING_COMMA_ARR.replace_all(&text, "]");
    let text = BARE_KEY.replace_all(&text, "${1}\"${2}\":");
    let text = SINGLE_QUOTED.replace_all(&text, ": \"${1}\"");
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn strips_json_fences() {
        let out = sanitize("```json\n{\"a\": 1}\n```");
        assert_eq!(out, "{\"a\": 1}");
        serde_json::from_str::<Value>(&out).unwrap();
    }

    #[test]
    fn drops_prose_around_the_json() {
        let out = sanitize("Sure, here is your form:\n{\"a\": 1}\nLet me know!");
        assert_eq!(out, "{\"a\": 1}");
    }

    #[test]
    fn removes_trailing_commas() {
        let out = sanitize("{\"a\": [1, 2,], \"b\": {\"c\": 3,},}");
        serde_json::from_str::<Value>(&out).unwrap();
    }

    #[test]
    fn quotes_bare_keys_and_single_quoted_values() {
        let out = sanitize("{title: 'Contact', fields: []}");
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["title"], "Contact");
    }

    #[test]
    fn collapses_newlines_and_whitespace_runs() {
        let out = sanitize("{\"a\":\n\n   1}");
        assert_eq!(out, "{\"a\": 1}");
    }

    #[test]
    fn text_without_json_markers_is_left_alone() {
        assert_eq!(sanitize("I cannot help with that."), "I cannot help with that.");
    }

    #[test]
    fn repaired_relaxed_wrapping_decodes_like_the_clean_original() {
        let clean = r#"{"title": "Contact", "fields": [{"name": "email"}]}"#;
        let wrapped = "```json\n{title: 'Contact', \"fields\": [{\"name\": \"email\",},],}\n```";
        let repaired: Value = serde_json::from_str(&sanitize(wrapped)).unwrap();
        let expected: Value = serde_json::from_str(clean).unwrap();
        assert_eq!(repaired, expected);
    }
}
