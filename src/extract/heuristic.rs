//! Pattern-based extraction: classify each line against the rule table,
//! falling back to sentence-level imperative detection for narrative
//! text that carries no list formatting at all.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;
use crate::config::ExtractorConfig;

/// Sentence boundary: terminal punctuation followed by whitespace. The
/// punctuation stays with the sentence to its left.
static SENTENCE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Extract candidate action items from free-form note text using only
/// shallow lexical patterns. Pure; never fails, empty input yields an
/// empty list.
pub fn extract_heuristic(config: &ExtractorConfig, text: &str) -> Vec<String> {
    let mut extracted: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if config.rules.is_action_line(line) {
            extracted.push(config.rules.clean_action_line(line));
        }
    }

    // No line classified: narrative text. Split into sentences and keep
    // the ones that open with an imperative verb.
    if extracted.is_empty() {
        for sentence in split_sentences(text.trim()) {
            let sentence = sentence.trim();
            if !sentence.is_empty() && config.rules.opens_imperatively(sentence) {
                extracted.push(sentence.to_string());
            }
        }
    }

    tracing::debug!(candidates = extracted.len(), "heuristic extraction complete");
    normalize(&extracted)
}

/// Split text on sentence-terminal punctuation followed by whitespace,
/// keeping the punctuation with the preceding sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The terminal punctuation is a single ASCII byte.
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExtractorConfig {
        ExtractorConfig::default()
    }

    #[test]
    fn empty_and_whitespace_input_yield_nothing() {
        assert!(extract_heuristic(&config(), "").is_empty());
        assert!(extract_heuristic(&config(), "   \n\n \t ").is_empty());
    }

    #[test]
    fn bullets_checkboxes_and_ordinals_extract() {
        let text = "Notes from meeting:\n\
                    - [ ] Set up database\n\
                    * implement API extract endpoint\n\
                    1. Write tests\n\
                    Some narrative sentence here";
        let items = extract_heuristic(&config(), text);
        assert_eq!(
            items,
            vec![
                "Set up database",
                "implement API extract endpoint",
                "Write tests",
            ]
        );
    }

    #[test]
    fn keyword_and_exclamation_lines_extract_in_order() {
        let text = "TODO: write tests\nACTION: review PR\nShip it!\nNot actionable";
        let items = extract_heuristic(&config(), text);
        assert_eq!(items, vec!["TODO: write tests", "ACTION: review PR", "Ship it!"]);
    }

    #[test]
    fn mixed_bullet_styles_all_extract() {
        let text = "- First item with dash\n* Second item with asterisk\n• Third item with bullet point";
        let items = extract_heuristic(&config(), text);
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], "Third item with bullet point");
    }

    #[test]
    fn sentence_fallback_keeps_imperative_openings_only() {
        let text = "Add new feature to the system. Random commentary here.";
        let items = extract_heuristic(&config(), text);
        assert!(items.contains(&"Add new feature to the system.".to_string()));
        assert!(!items.iter().any(|i| i.contains("Random commentary")));
    }

    #[test]
    fn sentence_fallback_skipped_when_lines_classify() {
        // "Check the logs." would match the fallback vocabulary, but the
        // bulleted line above it means the fallback never runs.
        let text = "- Buy milk\nCheck the logs. More prose follows.";
        let items = extract_heuristic(&config(), text);
        assert_eq!(items, vec!["Buy milk"]);
    }

    #[test]
    fn duplicates_collapse_case_insensitively() {
        let text = "- Set up database\n- set up database\n- SET UP DATABASE\n- Different task";
        let items = extract_heuristic(&config(), text);
        assert_eq!(items, vec!["Set up database", "Different task"]);
    }

    #[test]
    fn checkbox_markers_never_survive_extraction() {
        let text = "- [ ] Task with empty checkbox\n- [todo] Task with todo marker";
        let items = extract_heuristic(&config(), text);
        assert_eq!(items.len(), 2);
        for item in &items {
            assert!(!item.contains("[ ]"));
            assert!(!item.to_lowercase().contains("[todo]"));
        }
    }

    #[test]
    fn sentence_splitting_keeps_terminal_punctuation() {
        let sentences = split_sentences("Add a thing. Fix a bug! Verify it? trailing");
        assert_eq!(sentences, vec!["Add a thing.", "Fix a bug!", "Verify it?", "trailing"]);
    }

    #[test]
    fn line_matching_multiple_rules_extracts_once() {
        let items = extract_heuristic(&config(), "- TODO: [ ] ship the fix!");
        assert_eq!(items, vec!["TODO: [ ] ship the fix!"]);
    }
}
