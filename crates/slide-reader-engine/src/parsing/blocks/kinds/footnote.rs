use std::sync::LazyLock;

use regex::Regex;

static DEFINITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\^([^\]]+)\]:\s+(.+)$").unwrap());

/// A `[^id]: text` footnote definition. Inline `[^id]` references stay in
/// the prose untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FootnoteDef {
    pub id: String,
    pub text: String,
}

impl FootnoteDef {
    pub fn parse(trimmed: &str) -> Option<Self> {
        DEFINITION.captures(trimmed).map(|caps| Self {
            id: caps[1].to_string(),
            text: caps[2].trim().to_string(),
        })
    }
}
