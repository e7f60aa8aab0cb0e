use crate::models::SourceDocument;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file as a document titled after its file name
pub fn read_document(path: &Path) -> Result<SourceDocument, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(SourceDocument::from_path_and_content(path, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::SegmenterOptions;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_document_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "talk.md", "# Test Content\n\nParagraph.");

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.title, "talk");
        assert_eq!(doc.content, "# Test Content\n\nParagraph.");
    }

    #[test]
    fn test_read_document_not_found() {
        let dir = create_test_dir();
        let result = read_document(&dir.path().join("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = create_test_dir();
        let result = read_document(dir.path());
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_read_document_segments() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "notes.md", "- First item\n- Second item");

        let slides = read_document(&path)
            .unwrap()
            .slides(&SegmenterOptions::default());
        assert_eq!(slides.len(), 2);
        assert_eq!(slides[1].title, "notes");
    }
}
