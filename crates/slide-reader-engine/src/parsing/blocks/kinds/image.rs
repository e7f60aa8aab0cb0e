use std::sync::LazyLock;

use regex::Regex;

static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)\s]+)(?:\s+[^)]*)?\)$").unwrap());

/// A standalone `![alt](url)` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub alt: String,
    pub url: String,
}

impl Image {
    /// Slide text used when the image has no alt text.
    pub const FALLBACK_CAPTION: &'static str = "Image";

    pub fn parse(trimmed: &str) -> Option<Self> {
        IMAGE.captures(trimmed).map(|caps| Self {
            alt: caps[1].trim().to_string(),
            url: caps[2].to_string(),
        })
    }

    pub fn caption(&self) -> &str {
        if self.alt.is_empty() {
            Self::FALLBACK_CAPTION
        } else {
            &self.alt
        }
    }
}
