//! # Sectionizer
//!
//! Splits a document into heading-delimited [`Section`]s.
//!
//! A heading is either an explicit `#` line or a short, title-cased line
//! standing alone between blank lines (see [`HeadingHeuristics`]). Headings
//! are never detected inside a fenced code block.

pub mod heading;

pub use heading::{HeadingHeuristics, clean_subtitle, is_explicit_heading};

use crate::models::Section;
use crate::parsing::blocks::kinds::CodeFence;

/// Splits `content` into sections using the default heading heuristics.
pub fn sectionize(content: &str) -> Vec<Section> {
    sectionize_with(content, &HeadingHeuristics::default())
}

/// Splits `content` into sections.
///
/// Content before the first heading becomes a section without a subtitle.
/// A heading with nothing under it before the next heading produces no
/// section.
pub fn sectionize_with(content: &str, heuristics: &HeadingHeuristics) -> Vec<Section> {
    let lines: Vec<&str> = content.lines().collect();
    let mut sections = vec![];
    let mut subtitle: Option<String> = None;
    let mut current: Vec<String> = vec![];
    let mut in_fence = false;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if CodeFence::is_fence(trimmed) {
            in_fence = !in_fence;
            current.push(line.to_string());
            continue;
        }

        if in_fence {
            current.push(line.to_string());
            continue;
        }

        if is_heading(&lines, i, heuristics) {
            flush(&mut sections, &subtitle, &mut current);
            subtitle = Some(clean_subtitle(trimmed));
            continue;
        }

        if trimmed.is_empty() {
            if !current.is_empty() {
                current.push(String::new());
            }
            continue;
        }

        current.push(line.to_string());
    }

    if in_fence {
        log::debug!("document ends inside a code fence");
    }
    flush(&mut sections, &subtitle, &mut current);
    sections
}

fn is_heading(lines: &[&str], i: usize, heuristics: &HeadingHeuristics) -> bool {
    let trimmed = lines[i].trim();
    if is_explicit_heading(trimmed) {
        return true;
    }

    let blank = |line: Option<&&str>| line.is_none_or(|l| l.trim().is_empty());
    let prev = i.checked_sub(1).and_then(|p| lines.get(p));
    let next = lines.get(i + 1);

    blank(prev) && blank(next) && heuristics.looks_like_heading(trimmed)
}

fn flush(sections: &mut Vec<Section>, subtitle: &Option<String>, current: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    sections.push(Section::new(subtitle.clone(), current));
    current.clear();
}
