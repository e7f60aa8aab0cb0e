use std::sync::LazyLock;

use regex::Regex;

static RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*_]{3,}$").unwrap());

/// `---`, `***`, `___`. Recognised only so the line can be discarded.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn matches(trimmed: &str) -> bool {
        RULE.is_match(trimmed)
    }
}
