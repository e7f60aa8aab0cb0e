/// Fenced code block delimiters.
///
/// Only backtick fences are recognised. Any fence line closes an open
/// block, whatever follows the backticks.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Language reported when the opening fence carries no info string.
    pub const DEFAULT_LANGUAGE: &'static str = "text";

    /// Whether a trimmed line is a fence marker.
    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }

    /// Language tag of an opening fence line.
    pub fn language(trimmed: &str) -> String {
        let info = trimmed.trim_start_matches('`').trim();
        if info.is_empty() {
            Self::DEFAULT_LANGUAGE.to_string()
        } else {
            info.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_fence("```rust"));
        assert!(CodeFence::is_fence("```"));
    }

    #[test]
    fn tildes_are_not_fences() {
        assert!(!CodeFence::is_fence("~~~"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_fence("hello ```"));
    }

    #[test]
    fn language_from_info_string() {
        assert_eq!(CodeFence::language("```rust"), "rust");
        assert_eq!(CodeFence::language("```  python  "), "python");
    }

    #[test]
    fn language_defaults_to_text() {
        assert_eq!(CodeFence::language("```"), "text");
        assert_eq!(CodeFence::language("````"), "text");
    }
}
