pub mod blocks;
pub mod ids;
pub mod sections;
pub mod sentences;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::segment;
use ids::SlideIds;
use sections::{HeadingHeuristics, sectionize_with};

use crate::models::Slide;

/// Tunable parts of segmentation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SegmenterOptions {
    pub headings: HeadingHeuristics,
}

/// Segments a document into slides with default options.
pub fn process_content(title: &str, content: &str) -> Vec<Slide> {
    process_content_with(title, content, &SegmenterOptions::default())
}

/// Segments a document into slides.
///
/// Pure and infallible: the same input always yields the same slides, and
/// malformed Markdown degrades to plainer slides instead of failing.
pub fn process_content_with(title: &str, content: &str, options: &SegmenterOptions) -> Vec<Slide> {
    let sections = sectionize_with(content, &options.headings);
    log::debug!("segmenting {:?} into {} section(s)", title, sections.len());

    let mut ids = SlideIds::new();
    let mut slides = vec![];
    for section in &sections {
        slides.extend(segment(section, title, &mut ids));
    }

    log::trace!("produced {} slide(s)", ids.issued());
    slides
}
