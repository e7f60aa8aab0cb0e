use std::sync::LazyLock;

use regex::Regex;

static BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\$\$(.+)\$\$$").unwrap());

/// Single-line `$$ ... $$` display math. Inline `$...$` is left in prose.
pub struct MathBlock;

impl MathBlock {
    pub fn content(trimmed: &str) -> Option<String> {
        BLOCK
            .captures(trimmed)
            .map(|caps| caps[1].trim().to_string())
            .filter(|content| !content.is_empty())
    }
}
