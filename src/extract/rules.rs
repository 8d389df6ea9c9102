use std::sync::LazyLock;

use regex::Regex;

/// Leading bullet or ordinal list marker: `-`, `*`, `•`, or `<digits>.`
/// followed by whitespace.
static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[-*•]|\d+\.)\s+").unwrap());

/// Maximal run of letters/apostrophes — the "first word" of a sentence.
static FIRST_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z']+").unwrap());

/// Keyword prefixes that mark a line as an action item. Matched
/// case-insensitively against the trimmed line; the prefix is kept in
/// the extracted item.
const KEYWORD_PREFIXES: &[&str] = &["todo:", "action:", "next:"];

/// Checkbox markers recognized anywhere in a line and stripped from its
/// start.
const CHECKBOX_MARKERS: &[&str] = &["[ ]", "[todo]"];

/// First words that make a bare sentence read as a task. Used only by
/// the sentence-level fallback when no line classifies.
const IMPERATIVE_STARTERS: &[&str] = &[
    "add",
    "create",
    "implement",
    "fix",
    "update",
    "write",
    "check",
    "verify",
    "refactor",
    "document",
    "design",
    "investigate",
    "review",
    "test",
    "deploy",
    "configure",
    "setup",
    "remove",
    "delete",
    "move",
    "rename",
    "merge",
];

/// How a rule decides whether a line is an action line.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Line begins with a bullet or ordinal list marker.
    BulletPrefix,
    /// Trimmed line starts with one of the prefixes (case-insensitive).
    KeywordPrefix(Vec<String>),
    /// Line contains one of the markers (case-insensitive).
    ContainsMarker(Vec<String>),
    /// Trimmed line ends with an exclamation mark.
    TrailingExclamation,
}

impl Matcher {
    fn matches(&self, line: &str) -> bool {
        let lower = line.trim().to_lowercase();
        match self {
            Matcher::BulletPrefix => BULLET_PREFIX.is_match(line),
            Matcher::KeywordPrefix(prefixes) => {
                prefixes.iter().any(|p| lower.starts_with(p.as_str()))
            }
            Matcher::ContainsMarker(markers) => {
                markers.iter().any(|m| lower.contains(m.as_str()))
            }
            Matcher::TrailingExclamation => lower.ends_with('!'),
        }
    }
}

/// How a rule cleans the marker it recognizes. Every stripper is a no-op
/// when its marker is absent, so cleaning can always apply the full
/// table in order.
#[derive(Debug, Clone)]
pub enum Stripper {
    /// Remove a leading bullet/ordinal marker. Applied twice over so a
    /// doubled marker (`- - task`) is fully removed.
    BulletPrefix,
    /// Remove a leading `[ ]` or `[todo]` (case-insensitive).
    Checkbox,
    /// Leave the line as written.
    None,
}

impl Stripper {
    fn apply(&self, line: &str) -> String {
        match self {
            Stripper::BulletPrefix => {
                let mut out = line.trim().to_string();
                for _ in 0..2 {
                    out = BULLET_PREFIX.replace(&out, "").trim().to_string();
                }
                out
            }
            Stripper::Checkbox => {
                let mut out = line.trim().to_string();
                for marker in CHECKBOX_MARKERS {
                    let stripped = out
                        .get(..marker.len())
                        .filter(|head| head.eq_ignore_ascii_case(marker))
                        .map(|_| out[marker.len()..].trim().to_string());
                    if let Some(rest) = stripped {
                        out = rest;
                    }
                }
                out
            }
            Stripper::None => line.trim().to_string(),
        }
    }
}

/// One entry of the classification table: a way to recognize an action
/// line paired with the cleanup for the marker it recognizes.
#[derive(Debug, Clone)]
pub struct LineRule {
    pub name: &'static str,
    matcher: Matcher,
    stripper: Stripper,
}

/// Ordered rule table plus the imperative vocabulary for the sentence
/// fallback. Immutable after construction; the same table drives both
/// classification and marker stripping.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<LineRule>,
    imperative_starters: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            rules: vec![
                LineRule {
                    name: "bullet",
                    matcher: Matcher::BulletPrefix,
                    stripper: Stripper::BulletPrefix,
                },
                LineRule {
                    name: "keyword",
                    matcher: Matcher::KeywordPrefix(
                        KEYWORD_PREFIXES.iter().map(|p| p.to_string()).collect(),
                    ),
                    stripper: Stripper::None,
                },
                LineRule {
                    name: "checkbox",
                    matcher: Matcher::ContainsMarker(
                        CHECKBOX_MARKERS.iter().map(|m| m.to_string()).collect(),
                    ),
                    stripper: Stripper::Checkbox,
                },
                LineRule {
                    name: "exclamation",
                    matcher: Matcher::TrailingExclamation,
                    stripper: Stripper::None,
                },
            ],
            imperative_starters: IMPERATIVE_STARTERS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl RuleSet {
    /// True when any rule in the table recognizes the line.
    pub fn is_action_line(&self, line: &str) -> bool {
        self.rules.iter().any(|rule| rule.matcher.matches(line))
    }

    /// Strip recognized markers from an action line. Strippers run in
    /// table order (bullet marker first, then checkbox markers), each
    /// idempotent when its marker is absent.
    pub fn clean_action_line(&self, line: &str) -> String {
        self.rules
            .iter()
            .fold(line.trim().to_string(), |acc, rule| rule.stripper.apply(&acc))
    }

    /// True when the sentence's first word is one of the imperative
    /// starters (case-insensitive).
    pub fn opens_imperatively(&self, sentence: &str) -> bool {
        let Some(first) = FIRST_WORD.find(sentence) else {
            return false;
        };
        let first = first.as_str().to_lowercase();
        self.imperative_starters.iter().any(|w| *w == first)
    }

    /// Extend the imperative vocabulary with additional starters.
    pub fn with_imperative_starters<I>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.imperative_starters
            .extend(extra.into_iter().map(|w| w.to_lowercase()));
        self
    }
}

/// Strip a leading bullet/ordinal marker, reporting whether one was
/// present. Used by the response parser's line-based salvage, which only
/// trusts lines that were formatted as list items.
pub(crate) fn strip_bullet_prefix(line: &str) -> Option<String> {
    let m = BULLET_PREFIX.find(line)?;
    Some(line[m.end()..].trim().to_string())
}
