use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::blocks::MarkdownLineClassifier;

static EXPLICIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s+.+").unwrap());
static LEADING_HASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,6}\s+").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap());
static STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*|__([^_]+)__").unwrap());
static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*|\b_([^_]+)_\b").unwrap());

pub const DEFAULT_MAX_HEADING_LEN: usize = 120;
pub const DEFAULT_MIN_TITLE_CASE_RATIO: f64 = 0.4;

/// Sentence punctuation that rules a line out as a heading. `?`, `!` and `؟`
/// are allowed because headings are often phrased as questions.
const DISQUALIFYING_ENDINGS: &[char] = &['.', '؛'];
/// Inverted marks that open Spanish questions and exclamations.
const INVERTED_OPENERS: &[char] = &['¿', '¡'];

/// Thresholds for recognising headings written without `#` markers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingHeuristics {
    /// Longest line (in characters) still considered a heading.
    pub max_len: usize,
    /// Share of words that must start with a capital letter or digit.
    pub min_title_case_ratio: f64,
}

impl Default for HeadingHeuristics {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_HEADING_LEN,
            min_title_case_ratio: DEFAULT_MIN_TITLE_CASE_RATIO,
        }
    }
}

impl HeadingHeuristics {
    /// Line-local part of the implicit heading test. The caller checks that
    /// the surrounding lines are blank.
    pub fn looks_like_heading(&self, trimmed: &str) -> bool {
        let len = trimmed.chars().count();
        if len == 0 || len > self.max_len {
            return false;
        }
        if trimmed.starts_with('#') {
            return false;
        }
        if MarkdownLineClassifier
            .classify(trimmed)
            .kind
            .is_structural()
        {
            return false;
        }
        if trimmed.ends_with(DISQUALIFYING_ENDINGS) {
            return false;
        }
        trimmed.starts_with(INVERTED_OPENERS) || title_case_ratio(trimmed) >= self.min_title_case_ratio
    }
}

/// `# Heading` through `###### Heading`.
pub fn is_explicit_heading(trimmed: &str) -> bool {
    EXPLICIT.is_match(trimmed)
}

/// Fraction of whitespace-separated words starting with an uppercase letter
/// or a digit.
pub fn title_case_ratio(text: &str) -> f64 {
    let mut words = 0usize;
    let mut capitalised = 0usize;
    for word in text.split_whitespace() {
        words += 1;
        if word
            .chars()
            .next()
            .is_some_and(|c| c.is_uppercase() || c.is_numeric())
        {
            capitalised += 1;
        }
    }
    if words == 0 {
        0.0
    } else {
        capitalised as f64 / words as f64
    }
}

/// Strips heading markers, emphasis and link syntax, leaving display text.
pub fn clean_subtitle(trimmed: &str) -> String {
    let text = LEADING_HASHES.replace(trimmed, "");
    let text = LINK.replace_all(&text, "$1");
    let text = STRONG.replace_all(&text, "$1$2");
    let text = EMPHASIS.replace_all(&text, "$1$2");
    text.trim().trim_end_matches('#').trim().to_string()
}
