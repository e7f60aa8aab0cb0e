//! # Sentence Extraction
//!
//! Splits accumulated paragraph text into sentences without breaking inside
//! URLs or markdown link targets.
//!
//! Links and bare URLs are located first; a run of `.`, `!` and `?` ends a
//! sentence only when it starts outside every such span. The text itself is
//! never rewritten, so slices of the input come back verbatim.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

/// Markdown links first so the URL inside `[text](url)` is taken whole.
static PROTECTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\[[^\]]*\]\([^)]*\)",
        r"|https?://[^\s<>()\[\]]*[^\s<>()\[\].,!?;:'\x22]",
        r"|www\.[^\s<>()\[\]]*[^\s<>()\[\].,!?;:'\x22]",
    ))
    .unwrap()
});

const TERMINATORS: &[char] = &['.', '!', '?'];

/// Splits paragraph text into trimmed, non-empty sentences.
///
/// Text after the last terminator is kept as a final sentence, and text
/// without any terminator is a single sentence.
pub fn extract_sentences(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    let protected: Vec<Range<usize>> = PROTECTED.find_iter(text).map(|m| m.range()).collect();
    let is_boundary =
        |i: usize, c: char| TERMINATORS.contains(&c) && !in_spans(&protected, i);

    let mut sentences = vec![];
    let mut start = 0;
    // A terminator run only ends a sentence once some text precedes it.
    let mut has_text = false;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_boundary(i, c) {
            has_text |= !c.is_whitespace();
            continue;
        }
        if !has_text {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !is_boundary(j, next) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        sentences.push(text[start..end].trim().to_string());
        start = end;
        has_text = false;
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

/// Joins paragraph lines with single spaces and extracts sentences.
pub fn extract_paragraph(lines: &[String]) -> Vec<String> {
    extract_sentences(&lines.join(" "))
}

/// Whether byte offset `i` falls inside one of the sorted, disjoint `spans`.
fn in_spans(spans: &[Range<usize>], i: usize) -> bool {
    let k = spans.partition_point(|span| span.end <= i);
    spans.get(k).is_some_and(|span| span.start <= i)
}
