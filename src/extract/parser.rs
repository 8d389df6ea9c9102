//! Lenient parsing of the collaborator's response. Models are told to
//! answer with `{"action_items": [...]}` but routinely wrap the JSON in
//! prose, rename the key, or answer with a markdown list instead. Each
//! stage of the cascade recovers one of those failure modes; a response
//! that defeats all of them parses as "no items found", never an error.

use serde_json::Value;

use super::rules::strip_bullet_prefix;

/// Parse a model response into a list of action item strings.
///
/// `keys` is the ordered list of object keys accepted as the item array
/// (`action_items` first, then the alternates models substitute).
pub fn parse_model_response(keys: &[String], response: &str) -> Vec<String> {
    match serde_json::from_str::<Value>(response) {
        Ok(value) => items_from_value(keys, &value).unwrap_or_default(),
        Err(_) => recover_items(keys, response),
    }
}

/// Interpret a parsed JSON value: an object carrying one of the accepted
/// keys with an array value, or a bare array. Anything else is a valid
/// response with no recognizable items.
fn items_from_value(keys: &[String], value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Object(map) => keys
            .iter()
            .find_map(|key| map.get(key).and_then(Value::as_array))
            .map(|items| collect_strings(items)),
        Value::Array(items) => Some(collect_strings(items)),
        _ => None,
    }
}

/// Collect string elements, trimmed, dropping empties and non-strings.
fn collect_strings(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The response was not valid JSON. Scan for an embedded `{...}` or
/// `[...]` block and retry; failing that, salvage markdown list lines.
fn recover_items(keys: &[String], response: &str) -> Vec<String> {
    for (open, close) in [('{', '}'), ('[', ']')] {
        let Some(block) = enclosed_block(response, open, close) else {
            continue;
        };
        if let Ok(value) = serde_json::from_str::<Value>(block) {
            if let Some(items) = items_from_value(keys, &value) {
                return items;
            }
        }
    }
    salvage_list_lines(response)
}

/// Substring from the first `open` to the last `close`, when both exist
/// in that order.
fn enclosed_block(text: &str, open: char, close: char) -> Option<&str> {
    let start = text.find(open)?;
    let end = text.rfind(close)?;
    (end > start).then(|| &text[start..=end])
}

/// Last resort: treat lines that carry a bullet/ordinal marker as items,
/// discarding any that still open with JSON punctuation. Plain prose has
/// no marked lines and so yields nothing.
fn salvage_list_lines(response: &str) -> Vec<String> {
    let mut items = Vec::new();
    for line in response.lines() {
        let Some(stripped) = strip_bullet_prefix(line) else {
            continue;
        };
        if stripped.is_empty() || stripped.starts_with('{') || stripped.starts_with('[') {
            continue;
        }
        items.push(stripped);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> Vec<String> {
        crate::config::ExtractorConfig::default().response_keys
    }

    #[test]
    fn well_formed_object_parses() {
        let response = r#"{"action_items": ["Buy milk", "  Walk dog  ", ""]}"#;
        assert_eq!(parse_model_response(&keys(), response), vec!["Buy milk", "Walk dog"]);
    }

    #[test]
    fn empty_array_is_a_valid_no_items_response() {
        let response = r#"{"action_items": []}"#;
        assert!(parse_model_response(&keys(), response).is_empty());
    }

    #[test]
    fn alternate_keys_are_accepted_in_order() {
        assert_eq!(
            parse_model_response(&keys(), r#"{"items": ["a"]}"#),
            vec!["a"]
        );
        assert_eq!(
            parse_model_response(&keys(), r#"{"tasks": ["b"]}"#),
            vec!["b"]
        );
        assert_eq!(
            parse_model_response(&keys(), r#"{"actions": ["c"]}"#),
            vec!["c"]
        );
    }

    #[test]
    fn preferred_key_wins_over_alternates() {
        let response = r#"{"items": ["alt"], "action_items": ["primary"]}"#;
        assert_eq!(parse_model_response(&keys(), response), vec!["primary"]);
    }

    #[test]
    fn bare_array_parses() {
        assert_eq!(
            parse_model_response(&keys(), r#"["one", "two"]"#),
            vec!["one", "two"]
        );
    }

    #[test]
    fn non_string_elements_are_dropped() {
        let response = r#"{"action_items": ["keep", 42, null, {"x": 1}]}"#;
        assert_eq!(parse_model_response(&keys(), response), vec!["keep"]);
    }

    #[test]
    fn unrecognized_object_shape_yields_nothing() {
        assert!(parse_model_response(&keys(), r#"{"result": "done"}"#).is_empty());
        assert!(parse_model_response(&keys(), r#""just a string""#).is_empty());
    }

    #[test]
    fn json_wrapped_in_prose_is_recovered() {
        let response = "Sure! Here is the list:\n{\"action_items\": [\"Fix login\"]}\nHope that helps.";
        assert_eq!(parse_model_response(&keys(), response), vec!["Fix login"]);
    }

    #[test]
    fn bare_array_wrapped_in_prose_is_recovered() {
        let response = "The tasks are: [\"a\", \"b\"] as requested.";
        assert_eq!(parse_model_response(&keys(), response), vec!["a", "b"]);
    }

    #[test]
    fn markdown_list_is_salvaged() {
        let response = "Here are the action items:\n- Fix the login bug\n- Write the release notes\n";
        assert_eq!(
            parse_model_response(&keys(), response),
            vec!["Fix the login bug", "Write the release notes"]
        );
    }

    #[test]
    fn salvage_discards_json_punctuation_lines() {
        let response = "items below\n- {\"oops\": 1\n- real task\n";
        assert_eq!(parse_model_response(&keys(), response), vec!["real task"]);
    }

    #[test]
    fn plain_prose_yields_nothing() {
        let response = "I could not find any actionable items in these notes.";
        assert!(parse_model_response(&keys(), response).is_empty());
    }

    #[test]
    fn garbage_yields_nothing() {
        assert!(parse_model_response(&keys(), "%%% ??? !!!").is_empty());
        assert!(parse_model_response(&keys(), "").is_empty());
    }
}
