use std::sync::LazyLock;

use regex::Regex;

static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s*(.+)$").unwrap());

/// Blockquote line syntax.
///
/// Each quoted line becomes its own slide; nested `>` markers are kept in
/// the quoted text.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quoted text of a trimmed `> text` line.
    pub fn quoted_text(trimmed: &str) -> Option<String> {
        if !trimmed.starts_with(Self::PREFIX) {
            return None;
        }
        QUOTE
            .captures(trimmed)
            .map(|caps| caps[1].trim().to_string())
            .filter(|text| !text.is_empty())
    }
}
