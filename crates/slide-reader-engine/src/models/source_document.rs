use std::path::Path;

use crate::models::Slide;
use crate::parsing::{SegmenterOptions, process_content_with};

/// A titled Markdown document ready to be segmented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub title: String,
    pub content: String,
}

impl SourceDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Create a document titled after the file name at `path` (without `.md`).
    pub fn from_path_and_content(path: &Path, content: impl Into<String>) -> Self {
        Self::new(Self::extract_title(path), content)
    }

    /// Segment the document into slides.
    pub fn slides(&self, options: &SegmenterOptions) -> Vec<Slide> {
        process_content_with(&self.title, &self.content, options)
    }

    fn extract_title(path: &Path) -> String {
        path.file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.strip_suffix(".md").unwrap_or(name))
            .filter(|name| !name.is_empty())
            .unwrap_or("Untitled")
            .to_string()
    }
}
