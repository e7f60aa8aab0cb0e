use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{BulletPoint, ParentBullet};

static CHECKBOX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+\[([ xX])\]\s+(.+)$").unwrap());
static BULLETED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*+]\s+(.+)$").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(.+)$").unwrap());
static LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\p{Lu}[^:]{1,80}):\s+(.+)$").unwrap());

/// List item syntax: bullets, numbered items, task items and
/// `Label: description` lines.
pub struct ListItem;

/// A matched list item marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub text: String,
    pub numbered: bool,
    pub number: Option<u32>,
}

impl ListItem {
    /// Length bounds (in characters) for a `Label: description` line.
    pub const LABEL_MIN_LEN: usize = 3;
    pub const LABEL_MAX_LEN: usize = 120;

    /// `- [ ] task` / `- [x] done`, returning `(checked, text)`.
    pub fn checkbox(trimmed: &str) -> Option<(bool, String)> {
        CHECKBOX.captures(trimmed).map(|caps| {
            let checked = caps[1].eq_ignore_ascii_case("x");
            (checked, caps[2].trim().to_string())
        })
    }

    /// `- item`, `* item`, `+ item` or `1. item`.
    pub fn marker(trimmed: &str) -> Option<ListMarker> {
        if let Some(caps) = BULLETED.captures(trimmed) {
            return Some(ListMarker {
                text: caps[1].trim().to_string(),
                numbered: false,
                number: None,
            });
        }
        NUMBERED.captures(trimmed).map(|caps| ListMarker {
            text: caps[2].trim().to_string(),
            numbered: true,
            number: caps[1].parse().ok(),
        })
    }

    /// A capitalised `Label: description` line, normalised to a single
    /// space after the colon.
    pub fn label(trimmed: &str) -> Option<String> {
        let len = trimmed.chars().count();
        if !(Self::LABEL_MIN_LEN..=Self::LABEL_MAX_LEN).contains(&len) {
            return None;
        }
        LABEL
            .captures(trimmed)
            .map(|caps| format!("{}: {}", &caps[1], caps[2].trim()))
    }
}

/// Running list context for one section.
///
/// Keeps the texts already shown at each indent level and the most recent
/// top-level item, so each new item can be presented with its siblings and
/// parent.
#[derive(Debug, Default)]
pub struct BulletTracker {
    history: BTreeMap<usize, Vec<String>>,
    parent: Option<ParentBullet>,
    last_indent: usize,
}

impl BulletTracker {
    /// Records an item and returns its presentation context.
    pub fn push(&mut self, indent_level: usize, marker: &ListMarker) -> BulletPoint {
        if indent_level != self.last_indent {
            // Deeper levels belong to the previous branch.
            self.history.retain(|&level, _| level <= indent_level);
            self.last_indent = indent_level;
        }

        if indent_level == 0 {
            self.parent = Some(ParentBullet {
                text: marker.text.clone(),
                numbered: marker.numbered,
                number: marker.number,
            });
        }

        let level = self.history.entry(indent_level).or_default();
        let history = level.clone();
        level.push(marker.text.clone());

        BulletPoint {
            history,
            numbered: marker.numbered,
            number: marker.number,
            indent_level,
            parent: if indent_level > 0 {
                self.parent.clone()
            } else {
                None
            },
        }
    }

    /// Forget sibling history but keep the parent (prose interrupts a list).
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Full list termination.
    pub fn reset(&mut self) {
        self.history.clear();
        self.parent = None;
        self.last_indent = 0;
    }
}
